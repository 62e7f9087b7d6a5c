//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Read Ports
//!
//! - `MemberReader` - Member lookup
//! - `PackageCatalog` - Package catalog lookup
//!
//! ## Write Ports
//!
//! - `MembershipSubmitter` - Create / replace membership records

mod member_reader;
mod membership_submitter;
mod package_catalog;

pub use member_reader::MemberReader;
pub use membership_submitter::MembershipSubmitter;
pub use package_catalog::{CatalogFilter, PackageCatalog};
