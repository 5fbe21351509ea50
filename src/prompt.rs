use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::{validate_principal, validate_rate, validate_term, LoanInput};

pub const AMOUNT_PROMPT: &str = "Enter the loan amount: ";
pub const RATE_PROMPT: &str = "Enter the annual interest rate (in percentage): ";
pub const YEARS_PROMPT: &str = "Enter the repayment period (in years): ";

/// interactive reader for loan terms
///
/// Input is consumed as whitespace separated tokens, so the three values may
/// arrive on one line or spread over several; blank lines are skipped. Each
/// value is validated as soon as it is read.
pub struct PromptSession<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn read_amount(&mut self) -> Result<Money> {
        let token = self.prompt(AMOUNT_PROMPT)?;
        let amount = Money::from_decimal_exact(parse_decimal(&token)?);
        tracing::debug!(%amount, "read loan amount");
        validate_principal(amount)
    }

    pub fn read_rate(&mut self) -> Result<Decimal> {
        let token = self.prompt(RATE_PROMPT)?;
        let rate = parse_decimal(&token)?;
        tracing::debug!(%rate, "read annual rate");
        validate_rate(rate)
    }

    pub fn read_years(&mut self) -> Result<i64> {
        let years = self.prompt_for::<i64>(YEARS_PROMPT)?;
        tracing::debug!(years, "read repayment period");
        validate_term(years)
    }

    /// read whichever values are missing, in amount, rate, years order
    pub fn complete(
        &mut self,
        amount: Option<Money>,
        rate: Option<Decimal>,
        years: Option<i64>,
    ) -> Result<LoanInput> {
        let amount = match amount {
            Some(amount) => validate_principal(amount)?,
            None => self.read_amount()?,
        };
        let rate = match rate {
            Some(rate) => validate_rate(rate)?,
            None => self.read_rate()?,
        };
        let years = match years {
            Some(years) => validate_term(years)?,
            None => self.read_years()?,
        };

        LoanInput::new(amount, rate, years)
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt_for<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        let token = self.prompt(prompt)?;
        token
            .parse()
            .map_err(|_| LoanError::MalformedNumericInput { input: token })
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(LoanError::UnexpectedEndOfInput);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// plain or scientific notation
fn parse_decimal(token: &str) -> Result<Decimal> {
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .map_err(|_| LoanError::MalformedNumericInput {
            input: token.to_string(),
        })
}
