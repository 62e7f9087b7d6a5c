//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod membership;

pub use membership::{
    CreateMembershipCommand, CreateMembershipHandler, CreateMembershipResult,
    ListEligiblePackagesHandler, ListEligiblePackagesQuery, ListEligiblePackagesResult,
    MembershipQuote, QuoteMembershipHandler, QuoteMembershipQuery, QuoteMembershipResult,
    ReplaceMembershipCommand, ReplaceMembershipHandler, ReplaceMembershipResult,
};
