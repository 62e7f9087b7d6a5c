//! In-memory member directory.
//!
//! Holds normalised members keyed by id. Useful for tests and for
//! development without the remote API.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::{Member, MemberRecord};
use crate::ports::MemberReader;

/// In-memory storage for member records
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberDirectory {
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
}

impl InMemoryMemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with `members`
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let map = members.into_iter().map(|m| (m.id, m)).collect();
        Self {
            members: Arc::new(RwLock::new(map)),
        }
    }

    /// Parse a JSON array of API member records and seed the directory
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the JSON is malformed or a record fails
    /// normalisation.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let records: Vec<MemberRecord> = serde_json::from_str(json).map_err(|e| {
            DomainError::validation("members", format!("invalid member records: {}", e))
        })?;
        let members = records
            .iter()
            .map(MemberRecord::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_members(members))
    }

    /// Insert or overwrite a member
    pub async fn insert(&self, member: Member) {
        self.members.write().await.insert(member.id, member);
    }

    pub async fn len(&self) -> usize {
        self.members.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.read().await.is_empty()
    }
}

#[async_trait]
impl MemberReader for InMemoryMemberDirectory {
    async fn fetch_member(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self.members.read().await.get(id).cloned())
    }
}
