use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// how results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// three labelled lines
    #[default]
    Text,
    /// pretty-printed json object
    Json,
}

/// command line configuration
///
/// Any of amount, rate or years left out is prompted for on stdin.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "loan-calculator")]
#[command(about = "Monthly payment, total payment and total interest for a fixed-rate loan")]
pub struct CalculatorConfig {
    #[arg(long, allow_hyphen_values = true, help = "Loan amount")]
    pub amount: Option<Money>,

    #[arg(long, allow_hyphen_values = true, help = "Annual interest rate in percent")]
    pub rate: Option<Decimal>,

    #[arg(long, allow_hyphen_values = true, help = "Repayment period in years")]
    pub years: Option<i64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CalculatorConfig {
    /// true when every value was given on the command line
    pub fn is_non_interactive(&self) -> bool {
        self.amount.is_some() && self.rate.is_some() && self.years.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::AmortizationCalculator;
    use crate::prompt::PromptSession;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_parse_all_values() {
        let config = CalculatorConfig::try_parse_from([
            "loan-calculator",
            "--amount",
            "100000",
            "--rate",
            "5",
            "--years",
            "30",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.amount, Some(Money::from_major(100_000)));
        assert_eq!(config.rate, Some(dec!(5)));
        assert_eq!(config.years, Some(30));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.is_non_interactive());
        assert!(!config.verbose);
    }

    #[test]
    fn test_defaults_prompt_for_everything() {
        let config = CalculatorConfig::try_parse_from(["loan-calculator"]).unwrap();

        assert_eq!(config.amount, None);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.is_non_interactive());
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let config =
            CalculatorConfig::try_parse_from(["loan-calculator", "--amount", "-1", "--years", "-5"])
                .unwrap();

        assert_eq!(config.amount, Some(Money::from_major(-1)));
        assert_eq!(config.years, Some(-5));
    }

    #[test]
    fn test_tiny_amount_flag_is_accepted() {
        let config = CalculatorConfig::try_parse_from([
            "loan-calculator",
            "--amount",
            "0.000000001",
            "--rate",
            "5",
            "--years",
            "1",
        ])
        .unwrap();

        let mut session = PromptSession::new(Cursor::new(Vec::new()), Vec::new());
        let input = session
            .complete(config.amount, config.rate, config.years)
            .unwrap();

        assert_eq!(input.principal().as_decimal(), dec!(0.000000001));
        assert!(AmortizationCalculator::new().calculate(&input).is_ok());
    }

    #[test]
    fn test_malformed_value_rejected() {
        assert!(CalculatorConfig::try_parse_from(["loan-calculator", "--rate", "five"]).is_err());
    }
}
