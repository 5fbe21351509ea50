/// validation - how invalid terms are reported
use loan_calculator_rs::{compute, Money};
use rust_decimal_macros::dec;

fn main() {
    println!("=== validation example ===\n");

    let attempts = [
        ("zero amount", Money::ZERO, dec!(5), 30),
        ("negative rate", Money::from_major(10_000), dec!(-0.01), 10),
        ("zero term", Money::from_major(10_000), dec!(5), 0),
        // amount is checked first, so only that failure is reported
        ("everything wrong", Money::from_major(-1), dec!(-1), -5),
        ("interest free", Money::from_major(1_200), dec!(0), 1),
    ];

    for (label, amount, rate, years) in attempts {
        match compute(amount, rate, years) {
            Ok(result) => println!(
                "{label}: monthly payment {}",
                result.monthly_payment.to_fixed(2)
            ),
            Err(e) if e.is_validation() => println!("{label}: rejected ({e})"),
            Err(e) => println!("{label}: failed ({e})"),
        }
    }
}
