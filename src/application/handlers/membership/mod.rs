//! Membership handlers.
//!
//! ## Commands
//! - Creating a membership from the membership form
//! - Replacing an edited membership
//!
//! ## Queries
//! - Quote a package (GST regime, tax lines, complementary offer)
//! - List packages selectable by a member

mod create_membership;
mod list_eligible_packages;
mod quote_membership;
mod replace_membership;
mod selection;

// Commands
pub use create_membership::{
    CreateMembershipCommand, CreateMembershipHandler, CreateMembershipResult,
};
pub use replace_membership::{
    ReplaceMembershipCommand, ReplaceMembershipHandler, ReplaceMembershipResult,
};

// Queries
pub use list_eligible_packages::{
    ListEligiblePackagesHandler, ListEligiblePackagesQuery, ListEligiblePackagesResult,
};
pub use quote_membership::{
    MembershipQuote, QuoteMembershipHandler, QuoteMembershipQuery, QuoteMembershipResult,
};
