/// quick start - payment figures for a 30 year mortgage
use loan_calculator_rs::{compute, Money, PaymentReport};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $100,000 at 5% over 30 years
    let result = compute(Money::from_major(100_000), dec!(5), 30)?;

    print!("{}", PaymentReport::from(&result).text());

    Ok(())
}
