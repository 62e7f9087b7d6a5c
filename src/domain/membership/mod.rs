//! Membership domain module.
//!
//! Pricing, GST resolution and complementary-package eligibility for
//! membership sales. Everything here is synchronous and free of I/O.
//!
//! # Module Structure
//!
//! - `package` - Package catalog entries and API ingestion
//! - `member` - Member records and their active coverage
//! - `tax_regime` - CGST/SGST vs IGST resolution
//! - `fees` - Tax lines and totals
//! - `eligibility` - Complementary offers and catalog filtering
//! - `payment` - Payment modes and reference validation
//! - `aggregate` - Membership record assembly
//! - `errors` - Membership error type

mod aggregate;
mod eligibility;
mod errors;
mod fees;
mod member;
mod package;
mod payment;
mod tax_regime;

pub use aggregate::Membership;
pub use eligibility::{evaluate_eligibility, filter_catalog_for_member, Eligibility};
pub use errors::MembershipError;
pub use fees::{compute_amounts, FeeBreakdown};
pub use member::{ActiveCoverage, HeldMembership, HeldMembershipRecord, Member, MemberRecord};
pub use package::{Package, PackageRecord, PackageType, PackageTypeRecord};
pub use payment::{PaymentDetails, PaymentForm, PaymentMode};
pub use tax_regime::{resolve_tax_regime, TaxPolicy, TaxRates, TaxRegime};
