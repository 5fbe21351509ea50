use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::{LoanInput, LoanResult};

/// fixed-rate amortization calculator
///
/// Stateless; a single instance can be shared freely between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationCalculator;

impl AmortizationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// calculate payment figures for validated terms
    pub fn calculate(&self, input: &LoanInput) -> Result<LoanResult> {
        let total_payments = input.total_payments()?;
        let monthly_payment =
            calculate_monthly_payment(input.principal(), input.monthly_rate(), total_payments)?;

        let total_payment = monthly_payment
            .checked_mul(Decimal::from(total_payments))
            .ok_or_else(|| LoanError::overflow("total payment"))?;

        let total_interest = total_payment
            .checked_sub(input.principal())
            .ok_or_else(|| LoanError::overflow("total interest"))?;

        Ok(LoanResult {
            monthly_payment,
            total_payment,
            total_interest,
            total_payments,
        })
    }

    /// validate raw terms, then calculate
    pub fn compute(
        &self,
        principal: Money,
        annual_rate_percent: Decimal,
        term_years: i64,
    ) -> Result<LoanResult> {
        let input = LoanInput::new(principal, annual_rate_percent, term_years)?;
        self.calculate(&input)
    }
}

/// validate and calculate in one call
pub fn compute(
    principal: Money,
    annual_rate_percent: Decimal,
    term_years: i64,
) -> Result<LoanResult> {
    AmortizationCalculator::new().compute(principal, annual_rate_percent, term_years)
}

/// level monthly installment
///
/// payment = P * r / (1 - (1 + r)^-n), or P / n when r is zero
fn calculate_monthly_payment(principal: Money, monthly_rate: Rate, months: i64) -> Result<Money> {
    let r = monthly_rate.as_decimal();

    if r.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let base = Decimal::ONE
        .checked_add(r)
        .ok_or_else(|| LoanError::overflow("monthly rate"))?;

    // past the decimal range (1 + r)^-n is below the smallest representable fraction
    let discount = match base.checked_powi(months) {
        Some(compound) => Decimal::ONE / compound,
        None => Decimal::ZERO,
    };

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        // rate too small to register over the term
        return Ok(principal / Decimal::from(months));
    }

    principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|numerator| numerator.checked_div(denominator))
        .map(Money::from_decimal)
        .ok_or_else(|| LoanError::overflow("monthly payment"))
}
