//! Per-line GST amounts and grand total for a membership fee.

use serde::{Deserialize, Serialize};

use super::tax_regime::TaxRates;
use crate::domain::foundation::{Money, TaxRate};

/// Computed tax lines and totals, exact to the last digit.
///
/// Round with [`Money::round_to_paise`] when presenting or comparing at
/// currency precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub igst_amount: Money,
    pub total_tax: Money,
    pub total_amount: Money,
}

/// Computes tax lines for `basic_fees` at the given rates.
///
/// Lines and totals are exact; a missing rate contributes zero. Never
/// panics: amounts beyond `Decimal::MAX` saturate.
pub fn compute_amounts(basic_fees: Money, rates: &TaxRates) -> FeeBreakdown {
    let line = |rate: Option<TaxRate>| rate.map(|r| r.apply(basic_fees)).unwrap_or(Money::ZERO);

    let cgst_amount = line(rates.cgst_rate);
    let sgst_amount = line(rates.sgst_rate);
    let igst_amount = line(rates.igst_rate);
    let total_tax = cgst_amount + sgst_amount + igst_amount;

    FeeBreakdown {
        cgst_amount,
        sgst_amount,
        igst_amount,
        total_tax,
        total_amount: basic_fees + total_tax,
    }
}
