//! input validation ahead of any payment arithmetic
//!
//! checks run in a fixed order and stop at the first failure:
//! well-formedness (principal, rate, term), sign checks, then upper limits.

use serde::{Deserialize, Serialize};

use crate::config::ValidationLimits;
use crate::errors::{ValidationError, ValidationResult};
use crate::types::LoanRequest;

/// typed validation against the default limits
pub fn check_inputs(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<(), ValidationError> {
    check_inputs_with(&ValidationLimits::default(), principal, annual_rate_percent, term_years)
}

/// typed validation against caller-supplied limits
pub fn check_inputs_with(
    limits: &ValidationLimits,
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<(), ValidationError> {
    if !principal.is_finite() {
        return Err(ValidationError::PrincipalNotANumber);
    }
    if !annual_rate_percent.is_finite() {
        return Err(ValidationError::RateNotANumber);
    }
    if !term_years.is_finite() {
        return Err(ValidationError::TermNotANumber);
    }

    if principal <= 0.0 {
        return Err(ValidationError::PrincipalNotPositive);
    }
    if annual_rate_percent < 0.0 {
        return Err(ValidationError::RateNegative);
    }
    if term_years <= 0.0 {
        return Err(ValidationError::TermNotPositive);
    }

    if principal > limits.max_principal {
        return Err(ValidationError::PrincipalTooLarge);
    }
    if annual_rate_percent > limits.max_rate_percent {
        return Err(ValidationError::RateTooHigh);
    }
    if term_years > limits.max_term_years {
        return Err(ValidationError::TermTooLong);
    }

    Ok(())
}

/// validate loan inputs without failing, see [`check_inputs`]
pub fn validate_inputs(principal: f64, annual_rate_percent: f64, term_years: f64) -> ValidationResult {
    check_inputs(principal, annual_rate_percent, term_years).into()
}

pub fn validate_inputs_with(
    limits: &ValidationLimits,
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> ValidationResult {
    check_inputs_with(limits, principal, annual_rate_percent, term_years).into()
}

pub fn validate_request(request: &LoanRequest) -> ValidationResult {
    validate_inputs(request.principal, request.annual_rate_percent, request.term_years)
}

/// loan inputs plus the optional cost fields of a full mortgage quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    #[serde(default)]
    pub property_tax: f64,
    #[serde(default)]
    pub home_insurance: f64,
    #[serde(default)]
    pub pmi: f64,
    #[serde(default)]
    pub extra_payment: f64,
}

impl AdvancedInputs {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            property_tax: 0.0,
            home_insurance: 0.0,
            pmi: 0.0,
            extra_payment: 0.0,
        }
    }
}

pub fn check_advanced(inputs: &AdvancedInputs) -> Result<(), ValidationError> {
    check_inputs(inputs.principal, inputs.annual_rate_percent, inputs.term_years)?;

    // only negative costs are rejected here
    let costs = [
        inputs.property_tax,
        inputs.home_insurance,
        inputs.pmi,
        inputs.extra_payment,
    ];
    if costs.iter().any(|c| *c < 0.0) {
        return Err(ValidationError::AdditionalCostsNegative);
    }

    Ok(())
}

/// validate a full mortgage quote without failing
pub fn validate_advanced(inputs: &AdvancedInputs) -> ValidationResult {
    check_advanced(inputs).into()
}
