use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExtraPayment;
use crate::errors::{Result, ValidationError};
use crate::types::{monthly_rate, period_count};

use super::{compute_monthly_payment, ensure_finite, summary::total_paid, PAYOFF_TOLERANCE};

/// one month of a schedule with extra principal payments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentRow {
    pub month: u32,
    pub payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub extra_payment: f64,
    pub balance: f64,
    pub cumulative_interest: f64,
    pub cumulative_principal: f64,
}

/// payoff schedule with extra payments and the savings they produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentSchedule {
    pub base_payment: f64,
    pub schedule: Vec<ExtraPaymentRow>,
    pub total_months: u32,
    pub total_interest: f64,
    pub total_principal: f64,
    pub total_paid: f64,
    pub months_saved: i64,
    pub interest_saved: f64,
}

impl ExtraPaymentSchedule {
    /// cumulative principal repaid after the given month, zero before the first
    pub fn cumulative_principal_after(&self, month: u32) -> f64 {
        month
            .checked_sub(1)
            .and_then(|index| self.schedule.get(index as usize))
            .map(|row| row.cumulative_principal)
            .unwrap_or(0.0)
    }
}

/// pay the loan down with the base payment plus any extra principal
///
/// the principal portion is capped at the outstanding balance, and the loop
/// is bounded at twice the contractual term
pub fn generate_extra_payment_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    extra: &ExtraPayment,
) -> Result<ExtraPaymentSchedule> {
    ensure_finite(&[("extra_payment", extra.amount)])?;
    if extra.amount < 0.0 {
        return Err(ValidationError::AdditionalCostsNegative.into());
    }

    let base_payment = compute_monthly_payment(principal, annual_rate_percent, term_years)?;
    let rate = monthly_rate(annual_rate_percent);
    let contractual_months = period_count(term_years);
    let max_months = contractual_months.saturating_mul(2);

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(contractual_months as usize);
    let mut cumulative_interest = 0.0;
    let mut cumulative_principal = 0.0;
    let mut month = 1;

    while balance > PAYOFF_TOLERANCE && month <= max_months {
        let interest_payment = balance * rate;
        let scheduled_principal = base_payment - interest_payment;
        let mut extra_payment = extra.amount_for_month(month);
        let mut principal_payment = scheduled_principal + extra_payment;

        if principal_payment > balance {
            principal_payment = balance;
            extra_payment = (principal_payment - scheduled_principal).max(0.0);
        }

        balance -= principal_payment;
        if balance < PAYOFF_TOLERANCE {
            balance = 0.0;
        }
        cumulative_interest += interest_payment;
        cumulative_principal += principal_payment;

        schedule.push(ExtraPaymentRow {
            month,
            payment: interest_payment + principal_payment,
            principal_payment,
            interest_payment,
            extra_payment,
            balance: balance.max(0.0),
            cumulative_interest,
            cumulative_principal,
        });

        month += 1;
    }

    let total_months = schedule.len() as u32;
    let months_saved = i64::from(contractual_months) - i64::from(total_months);
    let interest_saved = total_paid(base_payment, term_years) - principal - cumulative_interest;

    debug!(
        total_months,
        months_saved,
        interest_saved,
        "generated extra payment schedule"
    );

    Ok(ExtraPaymentSchedule {
        base_payment,
        schedule,
        total_months,
        total_interest: cumulative_interest,
        total_principal: cumulative_principal,
        total_paid: cumulative_interest + cumulative_principal,
        months_saved,
        interest_saved,
    })
}
