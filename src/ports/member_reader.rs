//! Member reader port.
//!
//! Read-only access to member records held by the remote API. A member is
//! fetched once per form session and never mutated here.
//!
//! # Example
//!
//! ```ignore
//! async fn regime_for(
//!     reader: &dyn MemberReader,
//!     id: &MemberId,
//! ) -> Result<Option<TaxRegime>, DomainError> {
//!     let member = reader.fetch_member(id).await?;
//!     Ok(member.map(|m| resolve_tax_regime(&m)))
//! }
//! ```

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::Member;
use async_trait::async_trait;

/// Reader port for member lookups.
#[async_trait]
pub trait MemberReader: Send + Sync {
    /// Fetch a member with its active memberships.
    ///
    /// Returns `None` if no member has this id.
    ///
    /// # Errors
    ///
    /// - `RemoteApiError` if the upstream call fails
    async fn fetch_member(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;
}
