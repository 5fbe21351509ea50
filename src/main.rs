use std::io;
use std::process::ExitCode;

use clap::Parser;
use loan_calculator_rs::logger;
use loan_calculator_rs::{
    AmortizationCalculator, CalculatorConfig, OutputFormat, PaymentReport, PromptSession, Result,
};

fn run(config: &CalculatorConfig) -> Result<String> {
    let input = {
        let stdin = io::stdin();
        let mut session = PromptSession::new(stdin.lock(), io::stdout());
        session.complete(config.amount, config.rate, config.years)?
    };
    tracing::debug!(?input, "loan terms accepted");

    let result = AmortizationCalculator::new().calculate(&input)?;
    tracing::info!(
        monthly_payment = %result.monthly_payment,
        total_payments = result.total_payments,
        "payment calculated"
    );

    let report = PaymentReport::from(&result);
    match config.format {
        OutputFormat::Text => Ok(report.text()),
        OutputFormat::Json => Ok(format!("{}\n", report.json()?)),
    }
}

fn main() -> ExitCode {
    let config = CalculatorConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::debug!(
        ?config,
        non_interactive = config.is_non_interactive(),
        "starting loan calculator"
    );

    match run(&config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_validation() {
                tracing::warn!("rejected loan terms: {e}");
            } else {
                tracing::error!("calculation failed: {e}");
            }
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
