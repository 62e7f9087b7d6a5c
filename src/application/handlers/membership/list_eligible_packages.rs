//! ListEligiblePackagesHandler - Query handler for the package dropdown.

use std::sync::Arc;

use tracing::debug;

use super::selection::load_member;
use crate::domain::foundation::MemberId;
use crate::domain::membership::{filter_catalog_for_member, MembershipError, Package};
use crate::ports::{CatalogFilter, MemberReader, PackageCatalog};

/// Query for the packages a member may select.
#[derive(Debug, Clone)]
pub struct ListEligiblePackagesQuery {
    pub member_id: MemberId,
}

/// Packages selectable by the member, in catalog order.
pub type ListEligiblePackagesResult = Vec<Package>;

/// Handler listing packages visible to a member and not already held.
pub struct ListEligiblePackagesHandler {
    members: Arc<dyn MemberReader>,
    catalog: Arc<dyn PackageCatalog>,
}

impl ListEligiblePackagesHandler {
    pub fn new(members: Arc<dyn MemberReader>, catalog: Arc<dyn PackageCatalog>) -> Self {
        Self { members, catalog }
    }

    pub async fn handle(
        &self,
        query: ListEligiblePackagesQuery,
    ) -> Result<ListEligiblePackagesResult, MembershipError> {
        let member = load_member(self.members.as_ref(), query.member_id).await?;
        let packages = self
            .catalog
            .fetch_catalog(&CatalogFilter::for_chapter(member.chapter_id))
            .await?;

        let eligible = filter_catalog_for_member(&member, &packages);
        debug!(
            member_id = %query.member_id,
            offered = eligible.len(),
            catalog = packages.len(),
            "Filtered package catalog"
        );
        Ok(eligible)
    }
}
