//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, money, tax rates, errors)
//! - `membership` - Pricing, GST resolution and package eligibility

pub mod foundation;
pub mod membership;
