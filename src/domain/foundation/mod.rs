//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the membership domain.

mod errors;
mod ids;
mod money;
mod tax_rate;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChapterId, MemberId, MembershipId, PackageId};
pub use money::{Money, MAX_FEE};
pub use tax_rate::TaxRate;
