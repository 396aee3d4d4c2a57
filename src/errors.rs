use std::result::Result as StdResult;

use serde_json::error::Category;
use thiserror::Error;

/// Error type shared by the aggregation and projection core.
///
/// Every variant is a deterministic function of the input: retrying a call with
/// the same snapshot reproduces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("Validation failed for {record}: {reason}")]
    Validation { record: String, reason: String },
    #[error("Unsupported frequency: {0}")]
    UnsupportedFrequency(String),
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("No transactions recorded")]
    EmptyDataset,
    #[error("Persistence error: {0}")]
    Storage(String),
}

impl FinanceError {
    pub fn validation(record: impl Into<String>, reason: impl Into<String>) -> Self {
        FinanceError::Validation {
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a malformed input record, including frequency
    /// values outside the supported set.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FinanceError::Validation { .. } | FinanceError::UnsupportedFrequency(_)
        )
    }
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}

/// Well-formed JSON whose values are out of range (an unknown frequency, a
/// negative count, a missing field) is a validation failure of the record at
/// that position. Syntax errors and truncated input stay `Storage`.
impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => {
                let message = err.to_string();
                let location = format!(" at line {} column {}", err.line(), err.column());
                let reason = message.strip_suffix(&location).unwrap_or(&message);
                FinanceError::validation(
                    format!("record at line {}, column {}", err.line(), err.column()),
                    reason,
                )
            }
            Category::Io | Category::Syntax | Category::Eof => {
                FinanceError::Storage(err.to_string())
            }
        }
    }
}

/// Rejects amounts that are zero, negative or not finite.
pub fn ensure_positive_amount(record: impl Into<String>, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(FinanceError::validation(
            record,
            format!("amount must be a finite number, got {amount}"),
        ));
    }
    if amount <= 0.0 {
        return Err(FinanceError::validation(
            record,
            format!("amount must be positive, got {amount}"),
        ));
    }
    Ok(())
}
