/// payoff strategies - extra payments, bi-weekly plans, comparisons, refinancing
use amortization_rs::{
    bi_weekly_plan, compare_scenarios, monthly_pmi, refinance_savings, total_monthly_payment,
    ExtraPayment, HousingCosts, RefinanceInput, ScenarioInput, DEFAULT_PMI_RATE_PERCENT,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // $450k home with 10% down
    let (price, down) = (450_000.0, 45_000.0);
    let principal = price - down;
    let costs = HousingCosts {
        property_tax: 5_400.0,
        home_insurance: 1_500.0,
        pmi: monthly_pmi(price, down, DEFAULT_PMI_RATE_PERCENT),
        hoa_fees: 0.0,
    };
    let breakdown = total_monthly_payment(principal, 6.5, 30.0, &costs)?;
    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    // $300 extra every month versus the plain loan
    let plain = ScenarioInput::new(principal, 6.5, 30.0);
    let accelerated = plain.with_extra(ExtraPayment::monthly(300.0));
    let comparison = compare_scenarios(&plain, &accelerated)?;
    println!(
        "extra payments save {:.2} interest and {} months",
        comparison.interest_difference, comparison.time_difference_months
    );

    let plan = bi_weekly_plan(principal, 6.5, 30.0)?;
    println!(
        "bi-weekly: {:.2} every two weeks, paid off in {:.1} years",
        plan.bi_weekly_payment, plan.years_to_payoff
    );

    // refinance after five years at a lower rate
    let current = RefinanceInput {
        loan: plain,
        months_paid: 60,
    };
    let replacement = ScenarioInput::new(principal * 0.93, 5.25, 30.0);
    let refinance = refinance_savings(&current, &replacement, 7_500.0)?;
    println!("{}", serde_json::to_string_pretty(&refinance)?);

    Ok(())
}
