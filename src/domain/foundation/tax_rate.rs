//! Tax rate value object (percent, 0-100 scale).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Money, ValidationError};

/// A tax rate expressed in percent, between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a rate from a whole percent value, clamping to 100.
    pub fn percent(value: u32) -> Self {
        Self(Decimal::from(value.min(100)))
    }

    /// Creates a rate, returning error if outside 0-100.
    pub fn try_new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(ValidationError::invalid_format(
                "tax_rate",
                format!("expected 0-100 percent, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the rate in percent.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Tax owed on `base` at this rate.
    pub fn apply(&self, base: Money) -> Money {
        base.percent(self.0)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
