//! Membership submission port (write side).
//!
//! Persistence of assembled membership records is delegated to the remote
//! API. Records are never patched: an edit replaces the whole record.

use crate::domain::foundation::{DomainError, MembershipId};
use crate::domain::membership::Membership;
use async_trait::async_trait;

/// Submission port for membership records.
#[async_trait]
pub trait MembershipSubmitter: Send + Sync {
    /// Create a new membership record.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a record with the same id already exists
    /// - `RemoteApiError` on upstream failure
    async fn submit(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Replace the record stored under `id` with `membership`.
    ///
    /// # Errors
    ///
    /// - `MembershipNotFound` if no record exists under `id`
    /// - `RemoteApiError` on upstream failure
    async fn replace(&self, id: &MembershipId, membership: &Membership) -> Result<(), DomainError>;
}
