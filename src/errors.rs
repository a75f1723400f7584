use serde::{Deserialize, Serialize};
use thiserror::Error;

/// field-level rejection reasons produced by the validators
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Loan amount must be a valid number")]
    PrincipalNotANumber,

    #[error("Interest rate must be a valid number")]
    RateNotANumber,

    #[error("Loan term must be a valid number")]
    TermNotANumber,

    #[error("Loan amount must be greater than 0")]
    PrincipalNotPositive,

    #[error("Interest rate must be 0 or greater")]
    RateNegative,

    #[error("Loan term must be greater than 0")]
    TermNotPositive,

    #[error("Loan amount seems too large")]
    PrincipalTooLarge,

    #[error("Interest rate seems too high")]
    RateTooHigh,

    #[error("Loan term seems too long")]
    TermTooLong,

    #[error("Additional costs must be 0 or greater")]
    AdditionalCostsNegative,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid input: {field} must be a finite number")]
    InvalidInput {
        field: &'static str,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

/// failure reported by a sales tax provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tax lookup failed for {state_code}: {message}")]
pub struct TaxLookupError {
    pub state_code: String,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, LoanError>;

/// outcome of a non-throwing validation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            error: Some(error.to_string()),
        }
    }
}

impl From<std::result::Result<(), ValidationError>> for ValidationResult {
    fn from(outcome: std::result::Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => ValidationResult::valid(),
            Err(e) => ValidationResult::invalid(e),
        }
    }
}
