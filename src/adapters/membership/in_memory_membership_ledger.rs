//! In-memory membership ledger.
//!
//! Records submitted memberships so handlers can be exercised without the
//! remote API. Replacement swaps the whole record.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, MembershipId};
use crate::domain::membership::Membership;
use crate::ports::MembershipSubmitter;

/// In-memory store of submitted membership records
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipLedger {
    records: Arc<RwLock<HashMap<MembershipId, Membership>>>,
}

impl InMemoryMembershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &MembershipId) -> Option<Membership> {
        self.records.read().await.get(id).cloned()
    }

    /// All records belonging to `member_id`
    pub async fn for_member(&self, member_id: &MemberId) -> Vec<Membership> {
        self.records
            .read()
            .await
            .values()
            .filter(|m| &m.member_id == member_id)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl MembershipSubmitter for InMemoryMembershipLedger {
    async fn submit(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(&membership.id) {
            return Err(DomainError::validation(
                "id",
                format!("Membership {} already submitted", membership.id),
            ));
        }
        records.insert(membership.id, membership.clone());
        Ok(())
    }

    async fn replace(&self, id: &MembershipId, membership: &Membership) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(existing) => {
                *existing = membership.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                format!("Membership not found: {}", id),
            )),
        }
    }
}
