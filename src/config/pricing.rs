//! Pricing configuration
//!
//! Home jurisdiction and GST rates used to resolve a member's tax regime.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::TaxRate;
use crate::domain::membership::TaxPolicy;

/// Pricing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Two-digit GST state code of the home jurisdiction
    #[serde(default = "default_home_state_code")]
    pub home_state_code: String,

    /// Home state name, matched case-insensitively
    #[serde(default = "default_home_state_name")]
    pub home_state_name: String,

    /// Home-state cities (comma-separated)
    #[serde(default = "default_home_cities")]
    pub home_cities: String,

    #[serde(default = "default_cgst_rate")]
    pub cgst_rate: Decimal,

    #[serde(default = "default_sgst_rate")]
    pub sgst_rate: Decimal,

    #[serde(default = "default_igst_rate")]
    pub igst_rate: Decimal,
}

impl PricingConfig {
    /// Get home cities as a lowercase vector
    pub fn home_cities_list(&self) -> Vec<String> {
        self.home_cities
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Build the tax policy described by this configuration
    pub fn to_policy(&self) -> Result<TaxPolicy, ValidationError> {
        self.validate()?;
        Ok(TaxPolicy {
            home_state_code: self.home_state_code.trim().to_string(),
            home_state_name: self.home_state_name.trim().to_string(),
            home_city_keywords: self.home_cities_list(),
            cgst: rate("cgst_rate", self.cgst_rate)?,
            sgst: rate("sgst_rate", self.sgst_rate)?,
            igst: rate("igst_rate", self.igst_rate)?,
        })
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let code = self.home_state_code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidStateCode(code.to_string()));
        }
        if self.home_state_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("pricing.home_state_name"));
        }
        rate("cgst_rate", self.cgst_rate)?;
        rate("sgst_rate", self.sgst_rate)?;
        rate("igst_rate", self.igst_rate)?;
        if self.cgst_rate + self.sgst_rate != self.igst_rate {
            return Err(ValidationError::RatesMismatch {
                cgst: self.cgst_rate.to_string(),
                sgst: self.sgst_rate.to_string(),
                igst: self.igst_rate.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            home_state_code: default_home_state_code(),
            home_state_name: default_home_state_name(),
            home_cities: default_home_cities(),
            cgst_rate: default_cgst_rate(),
            sgst_rate: default_sgst_rate(),
            igst_rate: default_igst_rate(),
        }
    }
}

fn rate(field: &'static str, value: Decimal) -> Result<TaxRate, ValidationError> {
    TaxRate::try_new(value).map_err(|_| ValidationError::InvalidTaxRate {
        field,
        value: value.to_string(),
    })
}

fn default_home_state_code() -> String {
    "27".to_string()
}

fn default_home_state_name() -> String {
    "Maharashtra".to_string()
}

fn default_home_cities() -> String {
    "Mumbai,Navi Mumbai,Thane,Pune,Nagpur,Nashik,Aurangabad,Solapur,Kolhapur,Amravati".to_string()
}

fn default_cgst_rate() -> Decimal {
    Decimal::from(9)
}

fn default_sgst_rate() -> Decimal {
    Decimal::from(9)
}

fn default_igst_rate() -> Decimal {
    Decimal::from(18)
}
