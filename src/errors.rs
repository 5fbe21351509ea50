use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("Loan amount must be greater than 0.")]
    InvalidAmount {
        amount: Money,
    },

    #[error("Interest rate cannot be negative.")]
    InvalidRate {
        rate: Decimal,
    },

    #[error("Repayment period must be greater than 0.")]
    InvalidTerm {
        years: i64,
    },

    #[error("not a valid number: {input:?}")]
    MalformedNumericInput {
        input: String,
    },

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoanError {
    /// true for the three input validation failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LoanError::InvalidAmount { .. }
                | LoanError::InvalidRate { .. }
                | LoanError::InvalidTerm { .. }
        )
    }

    pub(crate) fn overflow(what: &str) -> Self {
        LoanError::CalculationError {
            message: format!("{what} exceeds the representable range"),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
