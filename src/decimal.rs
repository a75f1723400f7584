use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AmortizationRow, Schedule};

/// decimal places used for cents-denominated currencies
pub const CURRENCY_DP: u32 = 2;

/// convert an engine value to a decimal rounded half-to-even at `dp` places
///
/// returns None for NaN, infinities and values outside the decimal range
pub fn to_currency(value: f64, dp: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::try_from(value).ok().map(|d| d.round_dp(dp))
}

/// amortization row rounded for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundedRow {
    pub payment_number: u32,
    pub payment_amount: Decimal,
    pub principal_payment: Decimal,
    pub interest_payment: Decimal,
    pub remaining_balance: Decimal,
}

impl RoundedRow {
    pub fn from_row(row: &AmortizationRow, dp: u32) -> Option<Self> {
        Some(Self {
            payment_number: row.payment_number,
            payment_amount: to_currency(row.payment_amount, dp)?,
            principal_payment: to_currency(row.principal_payment, dp)?,
            interest_payment: to_currency(row.interest_payment, dp)?,
            remaining_balance: to_currency(row.remaining_balance, dp)?,
        })
    }
}

/// round every row of a schedule to currency precision
pub fn round_schedule(schedule: &Schedule) -> Option<Vec<RoundedRow>> {
    schedule
        .iter()
        .map(|row| RoundedRow::from_row(row, CURRENCY_DP))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_currency_rounding() {
        assert_eq!(to_currency(1073.6432460242781, 2), Some(dec!(1073.64)));
        assert_eq!(to_currency(0.125, 2), Some(dec!(0.12))); // half-to-even
        assert_eq!(to_currency(1000.0, 2), Some(dec!(1000)));
        assert_eq!(to_currency(-3.456, 1), Some(dec!(-3.5)));
    }

    #[test]
    fn test_to_currency_rejects_non_finite() {
        assert_eq!(to_currency(f64::NAN, 2), None);
        assert_eq!(to_currency(f64::INFINITY, 2), None);
        assert_eq!(to_currency(f64::NEG_INFINITY, 2), None);
    }

    #[test]
    fn test_rounded_row() {
        let row = AmortizationRow {
            payment_number: 7,
            payment_amount: 1073.6432,
            principal_payment: 240.3099,
            interest_payment: 833.3333,
            remaining_balance: 199_759.6901,
        };
        let rounded = RoundedRow::from_row(&row, CURRENCY_DP).unwrap();
        assert_eq!(rounded.payment_number, 7);
        assert_eq!(rounded.payment_amount, dec!(1073.64));
        assert_eq!(rounded.interest_payment, dec!(833.33));
        assert_eq!(rounded.remaining_balance, dec!(199759.69));

        let json = serde_json::to_value(rounded).unwrap();
        assert_eq!(json["paymentAmount"], "1073.64");
    }
}
