//! Adapters - Implementations of port interfaces.
//!
//! Following hexagonal architecture, adapters implement the ports defined
//! in the `ports` module.
//!
//! ## Available Adapters
//!
//! - `membership` - In-memory member directory, package catalog and ledger

pub mod membership;

pub use membership::{InMemoryMemberDirectory, InMemoryMembershipLedger, InMemoryPackageCatalog};
