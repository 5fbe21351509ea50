pub mod amortization;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod logger;
pub mod prompt;
pub mod report;
pub mod types;

// re-export key types
pub use amortization::{compute, AmortizationCalculator};
pub use config::{CalculatorConfig, OutputFormat};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use prompt::PromptSession;
pub use report::PaymentReport;
pub use types::{LoanInput, LoanResult, MONTHS_IN_YEAR};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
