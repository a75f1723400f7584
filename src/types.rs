use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// loan inputs as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl LoanRequest {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// parse form input; unparseable text becomes NaN so the validator
    /// reports it as not a valid number
    pub fn parse(principal: &str, annual_rate_percent: &str, term_years: &str) -> Self {
        Self {
            principal: parse_number(principal),
            annual_rate_percent: parse_number(annual_rate_percent),
            term_years: parse_number(term_years),
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }

    pub fn period_count(&self) -> u32 {
        period_count(self.term_years)
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// periodic rate for a percentage annual rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// number of monthly periods for a term in years
///
/// rounds to the nearest whole month and never returns fewer than one period
pub fn period_count(term_years: f64) -> u32 {
    let months = (term_years * 12.0).round();
    if months.is_nan() || months < 1.0 {
        1
    } else if months > u32::MAX as f64 {
        u32::MAX
    } else {
        months as u32
    }
}

/// one payment in an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub payment_number: u32,
    pub payment_amount: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub remaining_balance: f64,
}

/// amortization row with its due date attached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedRow {
    pub due_date: NaiveDate,
    #[serde(flatten)]
    pub row: AmortizationRow,
}

/// ordered payment ledger, payment numbers start at 1
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    rows: Vec<AmortizationRow>,
}

impl Schedule {
    pub(crate) fn from_rows(rows: Vec<AmortizationRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AmortizationRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&AmortizationRow> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&AmortizationRow> {
        self.rows.last()
    }

    /// get row for a 1-based payment number
    pub fn get(&self, payment_number: u32) -> Option<&AmortizationRow> {
        let index = payment_number.checked_sub(1)? as usize;
        self.rows.get(index)
    }

    /// interest summed over the ledger rows
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest_payment).sum()
    }

    /// principal summed over the ledger rows
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|r| r.principal_payment).sum()
    }

    /// payments summed over the ledger rows
    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment_amount).sum()
    }

    /// attach due dates, one calendar month apart starting at `first_payment`
    ///
    /// rows numbered 0 and dates past the end of the calendar are dropped
    pub fn dated(&self, first_payment: NaiveDate) -> Vec<DatedRow> {
        self.rows
            .iter()
            .filter_map(|row| {
                let offset = Months::new(row.payment_number.checked_sub(1)?);
                first_payment
                    .checked_add_months(offset)
                    .map(|due_date| DatedRow { due_date, row: *row })
            })
            .collect()
    }

    pub fn into_rows(self) -> Vec<AmortizationRow> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a AmortizationRow;
    type IntoIter = std::slice::Iter<'a, AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// theoretical totals derived from the payment amount and term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_paid: f64,
    pub total_interest: f64,
}
