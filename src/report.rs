use serde::Serialize;

use crate::errors::Result;
use crate::types::LoanResult;

/// decimal places shown to the user
pub const DISPLAY_DECIMALS: u32 = 2;

/// display view of a result, amounts already rounded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReport {
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
    pub total_payments: i64,
}

impl From<&LoanResult> for PaymentReport {
    fn from(result: &LoanResult) -> Self {
        Self {
            monthly_payment: result.monthly_payment.to_fixed(DISPLAY_DECIMALS),
            total_payment: result.total_payment.to_fixed(DISPLAY_DECIMALS),
            total_interest: result.total_interest.to_fixed(DISPLAY_DECIMALS),
            total_payments: result.total_payments,
        }
    }
}

impl PaymentReport {
    pub fn text(&self) -> String {
        format!(
            "Monthly Payment: {}\nTotal Payment: {}\nTotal Interest Paid: {}\n",
            self.monthly_payment, self.total_payment, self.total_interest
        )
    }

    pub fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
