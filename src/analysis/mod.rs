pub mod compare;
pub mod refinance;

use serde::{Deserialize, Serialize};

use crate::config::ExtraPayment;

pub use compare::{compare_scenarios, ScenarioComparison, ScenarioResult};
pub use refinance::{refinance_savings, RefinanceAnalysis, RefinanceInput};

/// a loan together with an optional extra payment plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    #[serde(default)]
    pub extra: ExtraPayment,
}

impl ScenarioInput {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            extra: ExtraPayment::none(),
        }
    }

    pub fn with_extra(mut self, extra: ExtraPayment) -> Self {
        self.extra = extra;
        self
    }
}
