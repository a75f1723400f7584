use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::payments::ensure_finite;

use super::compare::ScenarioResult;
use super::ScenarioInput;

/// the existing loan and how many payments have been made on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceInput {
    pub loan: ScenarioInput,
    #[serde(default)]
    pub months_paid: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinanceAnalysis {
    pub current_monthly_payment: f64,
    pub new_monthly_payment: f64,
    pub monthly_savings: f64,
    pub total_savings: f64,
    /// months of savings needed to recover closing costs, None when the new
    /// payment is not lower
    pub break_even_months: Option<f64>,
    pub worth_refinancing: bool,
}

/// compare the remaining cost of the current loan with a replacement loan
pub fn refinance_savings(
    current: &RefinanceInput,
    replacement: &ScenarioInput,
    closing_costs: f64,
) -> Result<RefinanceAnalysis> {
    ensure_finite(&[("closing_costs", closing_costs)])?;

    let current_result = ScenarioResult::evaluate(&current.loan)?;
    let new_result = ScenarioResult::evaluate(replacement)?;

    let repaid = current_result
        .outcome
        .cumulative_principal_after(current.months_paid);
    let current_remaining_cost = current_result.outcome.total_paid - repaid;
    let new_total_cost = new_result.outcome.total_paid + closing_costs;

    let monthly_savings = current_result.monthly_payment - new_result.monthly_payment;
    let total_savings = current_remaining_cost - new_total_cost;
    let break_even_months = if monthly_savings > 0.0 {
        Some(closing_costs / monthly_savings)
    } else {
        None
    };

    debug!(monthly_savings, total_savings, ?break_even_months, "evaluated refinance");

    Ok(RefinanceAnalysis {
        current_monthly_payment: current_result.monthly_payment,
        new_monthly_payment: new_result.monthly_payment,
        monthly_savings,
        total_savings,
        break_even_months,
        worth_refinancing: total_savings > 0.0,
    })
}
