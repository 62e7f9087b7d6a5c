//! Membership adapters - implementations of membership-related ports.
//!
//! - `InMemoryMemberDirectory` - `MemberReader` over seeded member records
//! - `InMemoryPackageCatalog` - `PackageCatalog` over seeded packages
//! - `InMemoryMembershipLedger` - `MembershipSubmitter` keeping submitted records

mod in_memory_member_directory;
mod in_memory_membership_ledger;
mod in_memory_package_catalog;

pub use in_memory_member_directory::InMemoryMemberDirectory;
pub use in_memory_membership_ledger::InMemoryMembershipLedger;
pub use in_memory_package_catalog::InMemoryPackageCatalog;
