//! Money value object in rupees, held as an exact decimal.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// Largest fee accepted at ingestion: one lakh crore rupees.
pub const MAX_FEE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Currency amount with exact decimal arithmetic.
///
/// Arithmetic is exact and saturates at `Decimal::MAX`. Rounding to paise is
/// left to display and currency-precision comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Wraps a decimal amount, rejecting values outside `(0, MAX_FEE]`.
    pub fn positive(field: &str, amount: Decimal) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected a positive amount, got {}", amount),
            ));
        }
        if amount > MAX_FEE {
            return Err(ValidationError::invalid_format(
                field,
                format!("amount {} exceeds the maximum of {}", amount, MAX_FEE),
            ));
        }
        Ok(Self(amount))
    }

    /// Returns the inner decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Rounds to two decimal places, midpoint away from zero.
    pub fn round_to_paise(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// `rate` percent of this amount, unrounded.
    pub fn percent(&self, rate: Decimal) -> Self {
        // Quotient first; with rate <= 100 the product stays in range.
        Self((self.0 / Decimal::ONE_HUNDRED).saturating_mul(rate))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.2}", self.round_to_paise().0)
    }
}
