use std::io::Cursor;

use loan_calculator_rs::prompt::{AMOUNT_PROMPT, RATE_PROMPT, YEARS_PROMPT};
use loan_calculator_rs::{
    compute, AmortizationCalculator, Decimal, LoanError, Money, PaymentReport, PromptSession,
};
use rust_decimal_macros::dec;

fn run_session(stdin: &str) -> (Result<String, LoanError>, String) {
    let mut session = PromptSession::new(Cursor::new(stdin.as_bytes().to_vec()), Vec::new());
    let outcome = session
        .complete(None, None, None)
        .and_then(|input| AmortizationCalculator::new().calculate(&input))
        .map(|result| PaymentReport::from(&result).text());
    let (_, prompts) = session.into_parts();
    (outcome, String::from_utf8(prompts).unwrap())
}

#[test]
fn test_full_session_standard_mortgage() {
    let (outcome, prompts) = run_session("100000\n5\n30\n");

    assert_eq!(prompts, format!("{AMOUNT_PROMPT}{RATE_PROMPT}{YEARS_PROMPT}"));
    let text = outcome.unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Monthly Payment: 536.82");
    assert!(lines[1].starts_with("Total Payment: 19325"));
    assert!(lines[2].starts_with("Total Interest Paid: 9325"));
}

#[test]
fn test_full_session_zero_interest() {
    let (outcome, _) = run_session("1200 0 1\n");

    assert_eq!(
        outcome.unwrap(),
        "Monthly Payment: 100.00\nTotal Payment: 1200.00\nTotal Interest Paid: 0.00\n"
    );
}

#[test]
fn test_error_messages_match_rules() {
    let cases = [
        ("0\n", "Loan amount must be greater than 0."),
        ("-1\n", "Loan amount must be greater than 0."),
        ("500\n-0.01\n", "Interest rate cannot be negative."),
        ("500\n3\n0\n", "Repayment period must be greater than 0."),
    ];

    for (stdin, message) in cases {
        let (outcome, _) = run_session(stdin);
        let err = outcome.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(format!("Error: {err}"), format!("Error: {message}"));
    }
}

#[test]
fn test_malformed_input_is_not_a_validation_error() {
    let (outcome, prompts) = run_session("100000\nfive\n");

    let err = outcome.unwrap_err();
    assert!(matches!(err, LoanError::MalformedNumericInput { .. }));
    assert!(!err.is_validation());
    assert_eq!(prompts, format!("{AMOUNT_PROMPT}{RATE_PROMPT}"));
}

#[test]
fn test_library_entry_point_matches_calculator() {
    let direct = compute(Money::from_major(75_000), dec!(4.25), 20).unwrap();
    let via_calculator = AmortizationCalculator::new()
        .compute(Money::from_major(75_000), dec!(4.25), 20)
        .unwrap();

    assert_eq!(direct, via_calculator);
    assert_eq!(
        direct.total_payment,
        direct.monthly_payment * Decimal::from(240)
    );
}

#[test]
fn test_rate_zero_is_valid_but_negative_is_not() {
    assert!(compute(Money::from_major(1_000), Decimal::ZERO, 5).is_ok());
    assert!(matches!(
        compute(Money::from_major(1_000), dec!(-0.01), 5),
        Err(LoanError::InvalidRate { .. })
    ));
}
