pub mod analysis;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod processor;
pub mod types;
pub mod validation;

// re-export key types
pub use analysis::{
    compare_scenarios, refinance_savings, RefinanceAnalysis, RefinanceInput, ScenarioComparison,
    ScenarioInput, ScenarioResult,
};
pub use config::{ExtraPayment, ExtraPaymentFrequency, HousingCosts, ValidationLimits};
pub use decimal::{round_schedule, to_currency, RoundedRow, CURRENCY_DP};
pub use errors::{LoanError, Result, TaxLookupError, ValidationError, ValidationResult};
pub use payments::{
    bi_weekly_plan, compute_monthly_payment, generate_extra_payment_schedule, generate_schedule,
    monthly_pmi, summarize, total_interest, total_monthly_payment, total_paid, BiWeeklyPlan,
    ExtraPaymentRow, ExtraPaymentSchedule, MonthlyCostBreakdown, DEFAULT_PMI_RATE_PERCENT,
};
pub use processor::{
    compute_loan_details, normalize_tax_rate, LoanApplication, LoanDetails, NoSalesTax,
    StaticTaxTable, TaxRateLookup,
};
pub use types::{period_count, AmortizationRow, DatedRow, LoanRequest, Schedule, Summary};
pub use validation::{
    check_inputs, validate_advanced, validate_inputs, validate_inputs_with, AdvancedInputs,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
