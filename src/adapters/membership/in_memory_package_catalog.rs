//! In-memory package catalog.
//!
//! Serves a fixed list of packages in insertion order. Can be seeded from
//! the JSON records the remote API returns.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::membership::{Package, PackageRecord};
use crate::ports::{CatalogFilter, PackageCatalog};

/// In-memory package catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryPackageCatalog {
    packages: Arc<RwLock<Vec<Package>>>,
    unavailable: bool,
}

impl InMemoryPackageCatalog {
    pub fn new(packages: Vec<Package>) -> Self {
        Self {
            packages: Arc::new(RwLock::new(packages)),
            unavailable: false,
        }
    }

    /// A catalog whose every fetch fails, for exercising error paths
    pub fn unavailable() -> Self {
        Self {
            packages: Arc::default(),
            unavailable: true,
        }
    }

    /// Parse a JSON array of API package records
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the JSON is malformed or a record fails
    /// normalisation.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let records: Vec<PackageRecord> = serde_json::from_str(json).map_err(|e| {
            DomainError::validation("packages", format!("invalid package records: {}", e))
        })?;
        let packages = records
            .iter()
            .map(PackageRecord::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(packages))
    }
}

#[async_trait]
impl PackageCatalog for InMemoryPackageCatalog {
    async fn fetch_catalog(&self, filter: &CatalogFilter) -> Result<Vec<Package>, DomainError> {
        if self.unavailable {
            return Err(DomainError::new(
                ErrorCode::RemoteApiError,
                "Package catalog unavailable",
            ));
        }

        let packages = self.packages.read().await;
        Ok(packages.iter().filter(|p| filter.matches(p)).cloned().collect())
    }
}
