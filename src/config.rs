use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};

/// upper bounds applied by the validator after the sign checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationLimits {
    pub max_principal: f64,
    pub max_rate_percent: f64,
    pub max_term_years: f64,
}

impl ValidationLimits {
    pub const DEFAULT_MAX_PRINCIPAL: f64 = 100_000_000.0;
    pub const DEFAULT_MAX_RATE_PERCENT: f64 = 100.0;
    pub const DEFAULT_MAX_TERM_YEARS: f64 = 50.0;

    /// load limits from a JSON document, missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let limits: ValidationLimits =
            serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        limits.validate()?;
        Ok(limits)
    }

    /// limits must be finite and positive to be meaningful
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_principal", self.max_principal),
            ("max_rate_percent", self.max_rate_percent),
            ("max_term_years", self.max_term_years),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LoanError::InvalidConfiguration {
                    message: format!("{} must be a positive finite number, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_principal: Self::DEFAULT_MAX_PRINCIPAL,
            max_rate_percent: Self::DEFAULT_MAX_RATE_PERCENT,
            max_term_years: Self::DEFAULT_MAX_TERM_YEARS,
        }
    }
}

/// recurring housing costs on top of principal and interest
///
/// property tax and insurance are annual amounts, pmi and hoa fees are monthly
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HousingCosts {
    pub property_tax: f64,
    pub home_insurance: f64,
    pub pmi: f64,
    pub hoa_fees: f64,
}

/// how often an extra principal payment recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtraPaymentFrequency {
    #[default]
    Monthly,
    Yearly,
    Once,
}

/// extra principal payment plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraPayment {
    pub amount: f64,
    pub frequency: ExtraPaymentFrequency,
    /// first month (1-based) the extra payment applies
    pub start_month: u32,
}

impl ExtraPayment {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn monthly(amount: f64) -> Self {
        Self {
            amount,
            frequency: ExtraPaymentFrequency::Monthly,
            start_month: 1,
        }
    }

    pub fn yearly(amount: f64) -> Self {
        Self {
            amount,
            frequency: ExtraPaymentFrequency::Yearly,
            start_month: 1,
        }
    }

    pub fn once(amount: f64, month: u32) -> Self {
        Self {
            amount,
            frequency: ExtraPaymentFrequency::Once,
            start_month: month,
        }
    }

    pub fn starting_at(mut self, month: u32) -> Self {
        self.start_month = month;
        self
    }

    /// extra amount due in the given month
    pub fn amount_for_month(&self, month: u32) -> f64 {
        if month < self.start_month {
            return 0.0;
        }

        let applies = match self.frequency {
            ExtraPaymentFrequency::Monthly => true,
            ExtraPaymentFrequency::Yearly => (month - self.start_month) % 12 == 0,
            ExtraPaymentFrequency::Once => month == self.start_month,
        };

        if applies {
            self.amount
        } else {
            0.0
        }
    }
}

impl Default for ExtraPayment {
    fn default() -> Self {
        Self {
            amount: 0.0,
            frequency: ExtraPaymentFrequency::Monthly,
            start_month: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ValidationLimits::default();
        assert_eq!(limits.max_principal, 100_000_000.0);
        assert_eq!(limits.max_rate_percent, 100.0);
        assert_eq!(limits.max_term_years, 50.0);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_limits_from_partial_json() {
        let limits = ValidationLimits::from_json(r#"{"maxTermYears": 30}"#).unwrap();
        assert_eq!(limits.max_term_years, 30.0);
        assert_eq!(limits.max_principal, ValidationLimits::DEFAULT_MAX_PRINCIPAL);
    }

    #[test]
    fn test_limits_reject_bad_values() {
        assert!(ValidationLimits::from_json(r#"{"maxRatePercent": -1}"#).is_err());
        assert!(ValidationLimits::from_json("not json").is_err());

        let limits = ValidationLimits {
            max_principal: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(LoanError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_extra_payment_frequencies() {
        let monthly = ExtraPayment::monthly(100.0).starting_at(3);
        assert_eq!(monthly.amount_for_month(2), 0.0);
        assert_eq!(monthly.amount_for_month(3), 100.0);
        assert_eq!(monthly.amount_for_month(4), 100.0);

        let yearly = ExtraPayment::yearly(1_000.0).starting_at(6);
        assert_eq!(yearly.amount_for_month(6), 1_000.0);
        assert_eq!(yearly.amount_for_month(7), 0.0);
        assert_eq!(yearly.amount_for_month(18), 1_000.0);

        let once = ExtraPayment::once(5_000.0, 12);
        assert_eq!(once.amount_for_month(12), 5_000.0);
        assert_eq!(once.amount_for_month(24), 0.0);

        assert_eq!(ExtraPayment::none().amount_for_month(1), 0.0);
    }

    #[test]
    fn test_housing_costs_deserialize_defaults() {
        let costs: HousingCosts = serde_json::from_str(r#"{"propertyTax": 3600}"#).unwrap();
        assert_eq!(costs.property_tax, 3_600.0);
        assert_eq!(costs.hoa_fees, 0.0);
    }
}
