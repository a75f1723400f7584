use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;

use super::{compute_monthly_payment, ensure_finite, PAYOFF_TOLERANCE};

const PERIODS_PER_YEAR: f64 = 26.0;

/// same loan on the monthly plan, for comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyComparison {
    pub monthly_payment: f64,
    pub monthly_total_interest: f64,
    pub interest_saved: f64,
    pub time_saved_years: f64,
}

/// half the monthly payment every two weeks, 26 payments a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiWeeklyPlan {
    pub bi_weekly_payment: f64,
    pub total_payments: u32,
    pub years_to_payoff: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub compared_to_monthly: MonthlyComparison,
}

pub fn bi_weekly_plan(principal: f64, annual_rate_percent: f64, term_years: f64) -> Result<BiWeeklyPlan> {
    ensure_finite(&[
        ("principal", principal),
        ("annual_rate", annual_rate_percent),
        ("years", term_years),
    ])?;

    let monthly_payment = compute_monthly_payment(principal, annual_rate_percent, term_years)?;
    let bi_weekly_payment = monthly_payment / 2.0;
    let rate = annual_rate_percent / 100.0 / PERIODS_PER_YEAR;
    let max_payments = (term_years * PERIODS_PER_YEAR * 2.0).max(0.0);

    let mut balance = principal;
    let mut total_interest = 0.0;
    let mut payment_count: u32 = 0;

    while balance > PAYOFF_TOLERANCE && f64::from(payment_count) < max_payments {
        let interest_payment = balance * rate;
        let principal_payment = (bi_weekly_payment - interest_payment).min(balance);

        // a payment that does not cover interest never pays the loan off
        if principal_payment <= 0.0 {
            break;
        }

        balance -= principal_payment;
        total_interest += interest_payment;
        payment_count += 1;
    }

    let years_to_payoff = f64::from(payment_count) / PERIODS_PER_YEAR;
    let monthly_total_interest = monthly_payment * term_years * 12.0 - principal;

    debug!(payment_count, total_interest, "computed bi-weekly plan");

    Ok(BiWeeklyPlan {
        bi_weekly_payment,
        total_payments: payment_count,
        years_to_payoff,
        total_interest,
        total_paid: principal + total_interest,
        compared_to_monthly: MonthlyComparison {
            monthly_payment,
            monthly_total_interest,
            interest_saved: monthly_total_interest - total_interest,
            time_saved_years: term_years - years_to_payoff,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bi_weekly_pays_off_early() {
        let plan = bi_weekly_plan(200_000.0, 5.0, 30.0).unwrap();

        assert_abs_diff_eq!(plan.bi_weekly_payment, 536.82, epsilon = 0.01);
        assert!(plan.years_to_payoff < 30.0);
        assert!(plan.years_to_payoff > 20.0);
        assert!(plan.compared_to_monthly.interest_saved > 0.0);
        assert!(plan.compared_to_monthly.time_saved_years > 0.0);
        assert_abs_diff_eq!(plan.total_paid, 200_000.0 + plan.total_interest, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_bi_weekly() {
        let plan = bi_weekly_plan(26_000.0, 0.0, 2.0).unwrap();

        // 541.67 every two weeks against 26000: 48 payments
        assert_eq!(plan.total_payments, 48);
        assert_eq!(plan.total_interest, 0.0);
        assert_abs_diff_eq!(plan.years_to_payoff, 48.0 / 26.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(bi_weekly_plan(f64::NAN, 5.0, 30.0).is_err());
    }
}
