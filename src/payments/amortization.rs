use tracing::debug;

use crate::types::{monthly_rate, period_count, AmortizationRow, Schedule};

/// build the payment-by-payment ledger for a fixed monthly payment
///
/// The recurrence is the plain one: interest on the running balance, the rest
/// of the payment goes to principal. Floating-point drift is absorbed after the
/// pass by forcing the final balance to zero and flooring every recorded
/// balance at zero. The principal/interest split of each row is left as
/// computed, so every row still sums to the payment amount.
///
/// Inputs are trusted; run the validator first.
pub fn generate_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    monthly_payment: f64,
) -> Schedule {
    let rate = monthly_rate(annual_rate_percent);
    let number_of_payments = period_count(term_years);

    let mut rows = Vec::with_capacity(number_of_payments as usize);
    let mut remaining_balance = principal;

    for payment_number in 1..=number_of_payments {
        let interest_payment = remaining_balance * rate;
        let principal_payment = monthly_payment - interest_payment;
        remaining_balance -= principal_payment;

        rows.push(AmortizationRow {
            payment_number,
            payment_amount: monthly_payment,
            principal_payment,
            interest_payment,
            remaining_balance,
        });
    }

    if let Some(last) = rows.last_mut() {
        debug!(
            residual = last.remaining_balance,
            periods = number_of_payments,
            "forcing final balance to zero"
        );
        last.remaining_balance = 0.0;
    }

    for row in rows.iter_mut() {
        row.remaining_balance = row.remaining_balance.max(0.0);
    }

    Schedule::from_rows(rows)
}
