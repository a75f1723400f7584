pub mod amortization;
pub mod biweekly;
pub mod calculator;
pub mod overpayment;
pub mod summary;

use crate::errors::{LoanError, Result};

pub use amortization::generate_schedule;
pub use biweekly::{bi_weekly_plan, BiWeeklyPlan, MonthlyComparison};
pub use calculator::{
    compute_monthly_payment, monthly_pmi, total_monthly_payment, MonthlyCostBreakdown,
    DEFAULT_PMI_RATE_PERCENT,
};
pub use overpayment::{generate_extra_payment_schedule, ExtraPaymentRow, ExtraPaymentSchedule};
pub use summary::{summarize, total_interest, total_paid};

/// balance below which an open-ended payoff loop counts the loan as repaid
pub(crate) const PAYOFF_TOLERANCE: f64 = 1e-6;

/// fail fast on NaN and infinities before any arithmetic runs
pub(crate) fn ensure_finite(inputs: &[(&'static str, f64)]) -> Result<()> {
    match inputs.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(LoanError::InvalidInput { field: *field }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_reports_first_bad_field() {
        assert!(ensure_finite(&[("principal", 1.0), ("years", 30.0)]).is_ok());

        let err = ensure_finite(&[
            ("principal", 1.0),
            ("annual_rate", f64::NAN),
            ("years", f64::INFINITY),
        ])
        .unwrap_err();
        assert_eq!(err, LoanError::InvalidInput { field: "annual_rate" });
    }
}
