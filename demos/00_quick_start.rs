/// quick start - validate inputs, compute the payment and walk the schedule
use amortization_rs::{
    compute_monthly_payment, generate_schedule, summarize, to_currency, validate_inputs,
    CURRENCY_DP,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $200,000 at 5% over 30 years
    let (principal, rate, years) = (200_000.0, 5.0, 30.0);

    let validation = validate_inputs(principal, rate, years);
    if !validation.is_valid {
        eprintln!("rejected: {}", validation.error.unwrap_or_default());
        return Ok(());
    }

    let payment = compute_monthly_payment(principal, rate, years)?;
    let schedule = generate_schedule(principal, rate, years, payment);
    let summary = summarize(principal, years, payment);

    println!("monthly payment: {:?}", to_currency(payment, CURRENCY_DP));
    println!("total paid:      {:?}", to_currency(summary.total_paid, CURRENCY_DP));
    println!("total interest:  {:?}", to_currency(summary.total_interest, CURRENCY_DP));

    // first year and the final payment
    for row in schedule.iter().take(12).chain(schedule.last()) {
        println!(
            "{:>3}  principal {:>10.2}  interest {:>10.2}  balance {:>12.2}",
            row.payment_number, row.principal_payment, row.interest_payment, row.remaining_balance
        );
    }

    // bad input is reported, not panicked on
    println!("{:?}", validate_inputs(200_000.0, 150.0, 30.0));

    Ok(())
}
