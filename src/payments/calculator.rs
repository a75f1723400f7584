use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HousingCosts;
use crate::errors::Result;
use crate::types::monthly_rate;

use super::ensure_finite;

/// annual pmi rate applied when none is quoted
pub const DEFAULT_PMI_RATE_PERCENT: f64 = 0.5;

/// loan-to-value percentage at or below which no pmi is charged
const PMI_LTV_THRESHOLD: f64 = 80.0;

/// fixed monthly payment that fully amortizes the loan
///
/// no rounding is applied, currency precision is left to the caller
pub fn compute_monthly_payment(principal: f64, annual_rate_percent: f64, term_years: f64) -> Result<f64> {
    ensure_finite(&[
        ("principal", principal),
        ("annual_rate", annual_rate_percent),
        ("years", term_years),
    ])?;

    let rate = monthly_rate(annual_rate_percent);
    let number_of_payments = term_years * 12.0;

    let payment = if annual_rate_percent == 0.0 {
        principal / number_of_payments
    } else {
        // P * r * (1 + r)^n / ((1 + r)^n - 1)
        let compound = (1.0 + rate).powf(number_of_payments);
        principal * (rate * compound) / (compound - 1.0)
    };

    debug!(principal, annual_rate_percent, term_years, payment, "computed monthly payment");
    Ok(payment)
}

/// monthly outlay split into its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCostBreakdown {
    pub principal_and_interest: f64,
    pub property_tax: f64,
    pub home_insurance: f64,
    pub pmi: f64,
    pub hoa_fees: f64,
    pub total: f64,
}

/// monthly payment including taxes, insurance, pmi and hoa fees
pub fn total_monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    costs: &HousingCosts,
) -> Result<MonthlyCostBreakdown> {
    let principal_and_interest = compute_monthly_payment(principal, annual_rate_percent, term_years)?;
    let property_tax = costs.property_tax / 12.0;
    let home_insurance = costs.home_insurance / 12.0;

    Ok(MonthlyCostBreakdown {
        principal_and_interest,
        property_tax,
        home_insurance,
        pmi: costs.pmi,
        hoa_fees: costs.hoa_fees,
        total: principal_and_interest + property_tax + home_insurance + costs.pmi + costs.hoa_fees,
    })
}

/// monthly private mortgage insurance, zero once ltv is at or below 80%
pub fn monthly_pmi(home_price: f64, down_payment: f64, pmi_rate_percent: f64) -> f64 {
    let loan_amount = home_price - down_payment;
    let ltv = loan_amount / home_price * 100.0;

    // a zero home price leaves ltv NaN or infinite
    if !ltv.is_finite() || ltv <= PMI_LTV_THRESHOLD {
        return 0.0;
    }

    loan_amount * (pmi_rate_percent / 100.0) / 12.0
}
