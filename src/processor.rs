use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{LoanError, Result, TaxLookupError};
use crate::payments::{compute_monthly_payment, generate_schedule, summarize};
use crate::types::{LoanRequest, Schedule};
use crate::validation::check_inputs;

/// source of state sales tax rates
pub trait TaxRateLookup {
    /// raw rate as the provider reports it, either a fraction (0.065) or a
    /// percentage (6.5); None when the provider has no rate for the state
    fn sales_tax_rate(&self, state_code: &str) -> std::result::Result<Option<f64>, TaxLookupError>;
}

/// lookup that never charges sales tax
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSalesTax;

impl TaxRateLookup for NoSalesTax {
    fn sales_tax_rate(&self, _state_code: &str) -> std::result::Result<Option<f64>, TaxLookupError> {
        Ok(None)
    }
}

/// in-memory rate table keyed by upper-case state code
#[derive(Debug, Clone, Default)]
pub struct StaticTaxTable {
    rates: HashMap<String, f64>,
}

impl StaticTaxTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, state_code: &str, rate: f64) -> Self {
        self.rates.insert(state_code.to_ascii_uppercase(), rate);
        self
    }
}

impl TaxRateLookup for StaticTaxTable {
    fn sales_tax_rate(&self, state_code: &str) -> std::result::Result<Option<f64>, TaxLookupError> {
        Ok(self.rates.get(&state_code.to_ascii_uppercase()).copied())
    }
}

/// bring a provider rate to a fraction; unusable rates become zero
pub fn normalize_tax_rate(raw_rate: Option<f64>) -> f64 {
    match raw_rate {
        Some(rate) if rate.is_finite() && rate > 0.0 => {
            if rate > 1.0 {
                rate / 100.0
            } else {
                rate
            }
        }
        _ => 0.0,
    }
}

/// a loan request as submitted, with optional sales tax financing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub request: LoanRequest,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub include_sales_tax: bool,
}

impl LoanApplication {
    pub fn new(request: LoanRequest) -> Self {
        Self {
            request,
            state_code: String::new(),
            include_sales_tax: false,
        }
    }

    /// build from raw form fields, see [`LoanRequest::parse`]
    pub fn from_form(principal: &str, annual_rate_percent: &str, term_years: &str) -> Self {
        Self::new(LoanRequest::parse(principal, annual_rate_percent, term_years))
    }

    pub fn with_sales_tax(mut self, state_code: &str) -> Self {
        self.state_code = state_code.trim().to_string();
        self.include_sales_tax = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInfo {
    pub principal: f64,
    pub financed_principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub state_code: String,
    pub include_sales_tax: bool,
    pub tax_rate: f64,
    pub tax_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResults {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// everything a report needs for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    pub loan_info: LoanInfo,
    pub results: LoanResults,
    pub schedule: Schedule,
}

impl LoanDetails {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LoanError::CalculationError {
            message: format!("failed to serialize loan details: {}", e),
        })
    }
}

/// validate, finance any sales tax, then compute payment, totals and schedule
///
/// both the submitted and the financed principal must pass validation
pub fn compute_loan_details(
    application: &LoanApplication,
    tax_lookup: &impl TaxRateLookup,
) -> Result<LoanDetails> {
    let request = application.request;
    check_inputs(request.principal, request.annual_rate_percent, request.term_years)?;

    let mut tax_rate = 0.0;
    if application.include_sales_tax && !application.state_code.is_empty() {
        tax_rate = match tax_lookup.sales_tax_rate(&application.state_code) {
            Ok(raw) => normalize_tax_rate(raw),
            Err(e) => {
                warn!(error = %e, "sales tax lookup failed, financing without tax");
                0.0
            }
        };
    }

    let tax_amount = request.principal * tax_rate;
    let financed_principal = request.principal + tax_amount;
    check_inputs(financed_principal, request.annual_rate_percent, request.term_years)?;

    let monthly_payment =
        compute_monthly_payment(financed_principal, request.annual_rate_percent, request.term_years)?;
    let summary = summarize(financed_principal, request.term_years, monthly_payment);
    let schedule = generate_schedule(
        financed_principal,
        request.annual_rate_percent,
        request.term_years,
        monthly_payment,
    );

    debug!(
        financed_principal,
        tax_rate,
        periods = schedule.len(),
        "computed loan details"
    );

    Ok(LoanDetails {
        loan_info: LoanInfo {
            principal: request.principal,
            financed_principal,
            annual_rate_percent: request.annual_rate_percent,
            term_years: request.term_years,
            state_code: application.state_code.clone(),
            include_sales_tax: application.include_sales_tax,
            tax_rate,
            tax_amount,
        },
        results: LoanResults {
            monthly_payment,
            total_paid: summary.total_paid,
            total_interest: summary.total_interest,
        },
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use approx::assert_abs_diff_eq;

    struct FailingLookup;

    impl TaxRateLookup for FailingLookup {
        fn sales_tax_rate(&self, state_code: &str) -> std::result::Result<Option<f64>, TaxLookupError> {
            Err(TaxLookupError {
                state_code: state_code.to_string(),
                message: "provider unavailable".to_string(),
            })
        }
    }

    fn base_application() -> LoanApplication {
        LoanApplication::new(LoanRequest::new(200_000.0, 5.0, 30.0))
    }

    #[test]
    fn test_normalize_tax_rate() {
        assert_eq!(normalize_tax_rate(Some(0.07)), 0.07);
        assert_abs_diff_eq!(normalize_tax_rate(Some(7.0)), 0.07, epsilon = 1e-12);
        assert_eq!(normalize_tax_rate(Some(1.0)), 1.0);
        assert_eq!(normalize_tax_rate(None), 0.0);
        assert_eq!(normalize_tax_rate(Some(-1.0)), 0.0);
        assert_eq!(normalize_tax_rate(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn test_details_without_tax() {
        let details = compute_loan_details(&base_application(), &NoSalesTax).unwrap();

        assert_eq!(details.loan_info.financed_principal, 200_000.0);
        assert_abs_diff_eq!(details.results.monthly_payment, 1073.64, epsilon = 0.01);
        assert_eq!(details.schedule.len(), 360);
        assert_eq!(details.schedule.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_tax_is_financed() {
        let table = StaticTaxTable::new().with_rate("wa", 0.065);
        let application = base_application().with_sales_tax("WA");
        let details = compute_loan_details(&application, &table).unwrap();

        assert_abs_diff_eq!(details.loan_info.tax_amount, 13_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(details.loan_info.financed_principal, 213_000.0, epsilon = 1e-6);
        assert!(details.results.monthly_payment > 1073.64);
    }

    #[test]
    fn test_percent_rates_are_normalized() {
        let table = StaticTaxTable::new().with_rate("TX", 6.25);
        let application = base_application().with_sales_tax("TX");
        let details = compute_loan_details(&application, &table).unwrap();

        assert_abs_diff_eq!(details.loan_info.tax_rate, 0.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_tax_ignored_unless_requested() {
        let table = StaticTaxTable::new().with_rate("WA", 0.065);
        let mut application = base_application();
        application.state_code = "WA".to_string();

        let details = compute_loan_details(&application, &table).unwrap();
        assert_eq!(details.loan_info.tax_amount, 0.0);
    }

    #[test]
    fn test_lookup_failure_falls_back_to_no_tax() {
        let application = base_application().with_sales_tax("CA");
        let details = compute_loan_details(&application, &FailingLookup).unwrap();

        assert_eq!(details.loan_info.tax_amount, 0.0);
        assert_eq!(details.loan_info.financed_principal, 200_000.0);
    }

    #[test]
    fn test_invalid_form_input_is_rejected() {
        let application = LoanApplication::from_form("200000", "5", "forever");
        assert_eq!(
            compute_loan_details(&application, &NoSalesTax).unwrap_err(),
            LoanError::Validation(ValidationError::TermNotANumber)
        );
    }

    #[test]
    fn test_financed_tax_counts_against_limit() {
        let table = StaticTaxTable::new().with_rate("WA", 0.065);
        let application =
            LoanApplication::new(LoanRequest::new(100_000_000.0, 5.0, 30.0)).with_sales_tax("WA");

        assert_eq!(
            compute_loan_details(&application, &table).unwrap_err(),
            LoanError::Validation(ValidationError::PrincipalTooLarge)
        );

        // the same loan without tax sits exactly on the limit
        let untaxed = LoanApplication::new(LoanRequest::new(100_000_000.0, 5.0, 30.0));
        assert!(compute_loan_details(&untaxed, &table).is_ok());
    }

    #[test]
    fn test_json_report() {
        let details = compute_loan_details(&base_application(), &NoSalesTax).unwrap();
        let json: serde_json::Value = serde_json::from_str(&details.to_json().unwrap()).unwrap();

        assert_eq!(json["loanInfo"]["financedPrincipal"], 200_000.0);
        assert_eq!(json["schedule"].as_array().unwrap().len(), 360);
        assert_eq!(json["schedule"][359]["remainingBalance"], 0.0);
    }
}
