//! Membership record: a member joined to a package with payment metadata.
//!
//! # Design Decisions
//!
//! - **One tax regime**: the `TaxRegime` enum makes a record with both
//!   CGST/SGST and IGST unrepresentable
//! - **Exact money**: fees and tax lines are unrounded `rust_decimal` amounts
//! - **Replace, never patch**: edits assemble a whole new record under the same id

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::fees::{compute_amounts, FeeBreakdown};
use super::member::Member;
use super::package::{Package, PackageType};
use super::payment::{PaymentDetails, PaymentForm};
use super::tax_regime::{TaxPolicy, TaxRates, TaxRegime};
use crate::domain::foundation::{MemberId, MembershipId, Money, PackageId, ValidationError};

/// A membership ready for submission to the remote API.
///
/// # Invariants
///
/// - `amounts` were computed from `basic_fees` under `tax_regime`
/// - `start_date <= end_date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub member_id: MemberId,
    pub package_id: PackageId,
    pub package_type: PackageType,
    pub active: bool,
    pub basic_fees: Money,
    pub tax_regime: TaxRegime,
    pub amounts: FeeBreakdown,
    pub payment: PaymentDetails,
    pub start_date: NaiveDate,
    /// Last day covered, inclusive.
    pub end_date: NaiveDate,
}

impl Membership {
    /// Assembles a membership for `member` buying `package`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the payment form is incomplete for its
    /// mode or the period end cannot be represented.
    pub fn create(
        id: MembershipId,
        member: &Member,
        package: &Package,
        payment: &PaymentForm,
        start_date: NaiveDate,
        policy: &TaxPolicy,
    ) -> Result<Self, ValidationError> {
        let payment = PaymentDetails::try_from_form(payment)?;
        let end_date = period_end(start_date, package.period_months)?;
        let tax_regime = policy.resolve(member);
        let amounts = compute_amounts(package.basic_fees, &tax_regime.rates());

        Ok(Self {
            id,
            member_id: member.id,
            package_id: package.id,
            package_type: package.package_type,
            active: true,
            basic_fees: package.basic_fees,
            tax_regime,
            amounts,
            payment,
            start_date,
            end_date,
        })
    }

    /// Nullable rate triple for this record.
    pub fn rates(&self) -> TaxRates {
        self.tax_regime.rates()
    }

    pub fn total_amount(&self) -> Money {
        self.amounts.total_amount
    }

    /// Whether `date` falls inside the covered period.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Last covered day of a period of `months` starting on `start`.
fn period_end(start: NaiveDate, months: u32) -> Result<NaiveDate, ValidationError> {
    start
        .checked_add_months(Months::new(months))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| {
            ValidationError::invalid_format(
                "start_date",
                format!("period of {} months from {} is out of range", months, start),
            )
        })
}
