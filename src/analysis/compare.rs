use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::payments::{generate_extra_payment_schedule, ExtraPaymentSchedule};

use super::ScenarioInput;

/// one scenario run through the extra-payment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub input: ScenarioInput,
    pub monthly_payment: f64,
    pub outcome: ExtraPaymentSchedule,
}

impl ScenarioResult {
    pub fn evaluate(input: &ScenarioInput) -> Result<Self> {
        let outcome = generate_extra_payment_schedule(
            input.principal,
            input.annual_rate_percent,
            input.term_years,
            &input.extra,
        )?;

        Ok(Self {
            input: *input,
            monthly_payment: outcome.base_payment,
            outcome,
        })
    }
}

/// two scenarios side by side, differences are absolute values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub first: ScenarioResult,
    pub second: ScenarioResult,
    pub payment_difference: f64,
    pub interest_difference: f64,
    pub time_difference_months: u32,
    pub total_cost_difference: f64,
}

pub fn compare_scenarios(first: &ScenarioInput, second: &ScenarioInput) -> Result<ScenarioComparison> {
    let first = ScenarioResult::evaluate(first)?;
    let second = ScenarioResult::evaluate(second)?;

    Ok(ScenarioComparison {
        payment_difference: (first.monthly_payment - second.monthly_payment).abs(),
        interest_difference: (first.outcome.total_interest - second.outcome.total_interest).abs(),
        time_difference_months: first.outcome.total_months.abs_diff(second.outcome.total_months),
        total_cost_difference: (first.outcome.total_paid - second.outcome.total_paid).abs(),
        first,
        second,
    })
}
