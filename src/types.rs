use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// months in a year, one installment each
pub const MONTHS_IN_YEAR: i64 = 12;

/// validated loan terms
///
/// Only obtainable through [`LoanInput::new`], so a value of this type always
/// has a positive principal, a non-negative rate and a positive term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanInput {
    principal: Money,
    annual_rate: Rate,
    term_years: i64,
}

impl LoanInput {
    /// validate raw terms; the first violated rule wins (amount, rate, term)
    pub fn new(principal: Money, annual_rate_percent: Decimal, term_years: i64) -> Result<Self> {
        let principal = validate_principal(principal)?;
        let annual_rate_percent = validate_rate(annual_rate_percent)?;
        let term_years = validate_term(term_years)?;

        Ok(Self {
            principal,
            annual_rate: Rate::from_percent(annual_rate_percent),
            term_years,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn term_years(&self) -> i64 {
        self.term_years
    }

    /// number of monthly installments
    pub fn total_payments(&self) -> Result<i64> {
        self.term_years
            .checked_mul(MONTHS_IN_YEAR)
            .ok_or_else(|| LoanError::overflow("number of payments"))
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }
}

/// principal must be strictly positive
pub fn validate_principal(principal: Money) -> Result<Money> {
    if !principal.is_positive() {
        return Err(LoanError::InvalidAmount { amount: principal });
    }
    Ok(principal)
}

/// annual rate in percent must not be negative
pub fn validate_rate(annual_rate_percent: Decimal) -> Result<Decimal> {
    if annual_rate_percent < Decimal::ZERO {
        return Err(LoanError::InvalidRate {
            rate: annual_rate_percent,
        });
    }
    Ok(annual_rate_percent)
}

/// term in years must be strictly positive
pub fn validate_term(term_years: i64) -> Result<i64> {
    if term_years <= 0 {
        return Err(LoanError::InvalidTerm { years: term_years });
    }
    Ok(term_years)
}

/// payment figures for a fixed-rate loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub total_payments: i64,
}
