use crate::types::Summary;

/// theoretical total of all payments, independent of any generated schedule
pub fn total_paid(monthly_payment: f64, term_years: f64) -> f64 {
    monthly_payment * term_years * 12.0
}

pub fn total_interest(total_paid: f64, principal: f64) -> f64 {
    total_paid - principal
}

pub fn summarize(principal: f64, term_years: f64, monthly_payment: f64) -> Summary {
    let paid = total_paid(monthly_payment, term_years);
    Summary {
        total_paid: paid,
        total_interest: total_interest(paid, principal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::{compute_monthly_payment, generate_schedule};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_total_paid() {
        assert_abs_diff_eq!(total_paid(1073.64, 30.0), 386_510.4, epsilon = 0.01);
        assert_eq!(total_paid(500.0, 5.0), 30_000.0);
    }

    #[test]
    fn test_total_interest() {
        assert_abs_diff_eq!(total_interest(386_510.4, 200_000.0), 186_510.4, epsilon = 0.01);
        assert_eq!(total_interest(100_000.0, 100_000.0), 0.0);
    }

    #[test]
    fn test_summary_is_independent_of_schedule() {
        let (principal, rate, years) = (200_000.0, 5.0, 30.0);
        let payment = compute_monthly_payment(principal, rate, years).unwrap();
        let summary = summarize(principal, years, payment);
        let schedule = generate_schedule(principal, rate, years, payment);

        assert_eq!(summary.total_paid, payment * years * 12.0);
        // both figures agree closely without being reconciled
        assert_abs_diff_eq!(summary.total_paid, schedule.total_paid(), epsilon = 1e-3);
        assert_abs_diff_eq!(summary.total_interest, 186_511.57, epsilon = 0.01);
    }
}
