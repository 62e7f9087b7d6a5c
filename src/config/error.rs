//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Home state code must be two digits, got '{0}'")]
    InvalidStateCode(String),

    #[error("Invalid tax rate for {field}: {value}")]
    InvalidTaxRate { field: &'static str, value: String },

    #[error("CGST ({cgst}) + SGST ({sgst}) must equal IGST ({igst})")]
    RatesMismatch {
        cgst: String,
        sgst: String,
        igst: String,
    },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
