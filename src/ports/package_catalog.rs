//! Package catalog port.
//!
//! Read-only access to the purchasable packages. Implementations return
//! normalised [`Package`]s; raw API records are converted at ingestion.

use crate::domain::foundation::{ChapterId, DomainError};
use crate::domain::membership::Package;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Optional narrowing applied by the catalog source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// When set, only global packages and packages of this chapter.
    pub chapter_id: Option<ChapterId>,
}

impl CatalogFilter {
    /// No narrowing; the full catalog.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_chapter(chapter_id: Option<ChapterId>) -> Self {
        Self { chapter_id }
    }

    pub fn matches(&self, package: &Package) -> bool {
        package.is_visible_to(self.chapter_id)
    }
}

/// Catalog port for package lookups.
#[async_trait]
pub trait PackageCatalog: Send + Sync {
    /// Fetch packages matching `filter`, in catalog order.
    ///
    /// # Errors
    ///
    /// - `RemoteApiError` if the upstream call fails
    async fn fetch_catalog(&self, filter: &CatalogFilter) -> Result<Vec<Package>, DomainError>;
}
