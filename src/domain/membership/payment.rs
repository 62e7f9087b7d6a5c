//! Payment mode and mode-specific payment references.
//!
//! # Validation Rules
//!
//! | Mode | Required fields |
//! |------|-----------------|
//! | cash, card | none |
//! | netbanking | NEFT reference: 16 alphanumeric characters |
//! | upi | UTR reference: 12 digits |
//! | cheque | cheque number (6 digits), cheque date, bank name |
//!
//! Fields that do not belong to the selected mode are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

const CHEQUE_NUMBER_LEN: usize = 6;
const NEFT_REFERENCE_LEN: usize = 16;
const UTR_REFERENCE_LEN: usize = 12;

/// How the membership fee was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    Card,
    Netbanking,
    Upi,
    Cheque,
}

impl PaymentMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Card => "Card",
            PaymentMode::Netbanking => "Net Banking",
            PaymentMode::Upi => "UPI",
            PaymentMode::Cheque => "Cheque",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw payment fields as submitted with the membership form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub payment_mode: PaymentMode,
    #[serde(default)]
    pub cheque_number: Option<String>,
    #[serde(default)]
    pub cheque_date: Option<NaiveDate>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub neft_reference: Option<String>,
    #[serde(default)]
    pub utr_reference: Option<String>,
}

impl PaymentForm {
    /// A form for `mode` with every reference field empty.
    pub fn new(mode: PaymentMode) -> Self {
        Self {
            payment_mode: mode,
            cheque_number: None,
            cheque_date: None,
            bank_name: None,
            neft_reference: None,
            utr_reference: None,
        }
    }
}

/// Validated payment details; each mode carries only its own references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "payment_mode", rename_all = "lowercase")]
pub enum PaymentDetails {
    Cash,
    Card,
    Netbanking {
        neft_reference: String,
    },
    Upi {
        utr_reference: String,
    },
    Cheque {
        cheque_number: String,
        cheque_date: NaiveDate,
        bank_name: String,
    },
}

impl PaymentDetails {
    /// Validates the mode-dependent fields of `form`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first missing or malformed field.
    pub fn try_from_form(form: &PaymentForm) -> Result<Self, ValidationError> {
        match form.payment_mode {
            PaymentMode::Cash => Ok(PaymentDetails::Cash),
            PaymentMode::Card => Ok(PaymentDetails::Card),
            PaymentMode::Netbanking => {
                let reference = required("neft_reference", &form.neft_reference)?.to_uppercase();
                if reference.len() != NEFT_REFERENCE_LEN
                    || !reference.chars().all(|c| c.is_ascii_alphanumeric())
                {
                    return Err(ValidationError::invalid_format(
                        "neft_reference",
                        format!("expected {} alphanumeric characters", NEFT_REFERENCE_LEN),
                    ));
                }
                Ok(PaymentDetails::Netbanking {
                    neft_reference: reference,
                })
            }
            PaymentMode::Upi => {
                let reference = required("utr_reference", &form.utr_reference)?;
                if !is_digits(reference, UTR_REFERENCE_LEN) {
                    return Err(ValidationError::invalid_format(
                        "utr_reference",
                        format!("expected {} digits", UTR_REFERENCE_LEN),
                    ));
                }
                Ok(PaymentDetails::Upi {
                    utr_reference: reference.to_string(),
                })
            }
            PaymentMode::Cheque => {
                let number = required("cheque_number", &form.cheque_number)?;
                if !is_digits(number, CHEQUE_NUMBER_LEN) {
                    return Err(ValidationError::invalid_format(
                        "cheque_number",
                        format!("expected {} digits", CHEQUE_NUMBER_LEN),
                    ));
                }
                let cheque_date = form
                    .cheque_date
                    .ok_or_else(|| ValidationError::empty_field("cheque_date"))?;
                let bank_name = required("bank_name", &form.bank_name)?;

                Ok(PaymentDetails::Cheque {
                    cheque_number: number.to_string(),
                    cheque_date,
                    bank_name: bank_name.to_string(),
                })
            }
        }
    }

    pub fn mode(&self) -> PaymentMode {
        match self {
            PaymentDetails::Cash => PaymentMode::Cash,
            PaymentDetails::Card => PaymentMode::Card,
            PaymentDetails::Netbanking { .. } => PaymentMode::Netbanking,
            PaymentDetails::Upi { .. } => PaymentMode::Upi,
            PaymentDetails::Cheque { .. } => PaymentMode::Cheque,
        }
    }
}

impl TryFrom<&PaymentForm> for PaymentDetails {
    type Error = ValidationError;

    fn try_from(form: &PaymentForm) -> Result<Self, Self::Error> {
        Self::try_from_form(form)
    }
}

fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValidationError::empty_field(field))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}
