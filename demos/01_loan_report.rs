/// loan report - finance sales tax and emit the full report as json
use amortization_rs::chrono::NaiveDate;
use amortization_rs::{
    compute_loan_details, round_schedule, LoanApplication, StaticTaxTable,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // form input arrives as text; providers may quote percent or fraction
    let taxes = StaticTaxTable::new()
        .with_rate("WA", 0.065)
        .with_rate("TX", 6.25);
    let application = LoanApplication::from_form("35000", "6.9", "5").with_sales_tax("TX");

    let details = compute_loan_details(&application, &taxes)?;
    println!("{}", details.to_json()?);

    // dated, cent-rounded ledger for a printed statement
    let first_due = NaiveDate::from_ymd_opt(2025, 1, 31).ok_or("bad date")?;
    let rounded = round_schedule(&details.schedule).ok_or("schedule has non-finite values")?;
    for (dated, row) in details.schedule.dated(first_due).iter().zip(&rounded).take(6) {
        println!(
            "{}  #{:<3} {:>10} {:>10} {:>12}",
            dated.due_date,
            row.payment_number,
            row.principal_payment.to_string(),
            row.interest_payment.to_string(),
            row.remaining_balance.to_string()
        );
    }

    // unparseable input surfaces the field-level message
    let bad = LoanApplication::from_form("35000", "six", "5");
    if let Err(e) = compute_loan_details(&bad, &taxes) {
        println!("rejected: {}", e);
    }

    Ok(())
}
