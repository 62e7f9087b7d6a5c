//! Memberdesk - Membership pricing, GST and eligibility
//!
//! This crate quotes membership packages for members: it resolves whether
//! CGST + SGST or IGST applies, computes tax lines and totals, and decides
//! which complementary venue / head-office packages a member should be offered.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
