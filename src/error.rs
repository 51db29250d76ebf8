//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A monetary field carried a negative value
    #[error("{field} cannot be negative: {amount}")]
    NegativeAmount { field: &'static str, amount: i64 },

    /// A date value could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A transaction kind other than expense or income
    #[error("Invalid transaction kind: {0}")]
    InvalidKind(String),

    /// A month number outside 1..=12
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    /// A display amount that does not fit in minor units
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),
}

impl FinanceError {
    /// Create a negative-amount error for a transaction
    pub fn negative_transaction(amount: i64) -> Self {
        Self::NegativeAmount {
            field: "Transaction amount",
            amount,
        }
    }

    /// Create a negative-amount error for a budget
    pub fn negative_budget(amount: i64) -> Self {
        Self::NegativeAmount {
            field: "Budget amount",
            amount,
        }
    }

    /// Check if this error rejects malformed input (as opposed to I/O or config)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NegativeAmount { .. }
                | Self::InvalidDate(_)
                | Self::InvalidKind(_)
                | Self::InvalidMonth(_)
                | Self::AmountOutOfRange(_)
        )
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_negative_amount_error() {
        let err = FinanceError::negative_transaction(-500);
        assert_eq!(err.to_string(), "Transaction amount cannot be negative: -500");
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_month_error() {
        let err = FinanceError::InvalidMonth(13);
        assert_eq!(err.to_string(), "Invalid month: 13");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
        assert!(!err.is_validation());
    }
}
