//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while operating on an
//! account, appending to its transaction log, or rendering its report.
//!
//! # Error Categories
//!
//! - **Operation Errors**: Invalid amounts, insufficient funds, overflow
//! - **Log Errors**: Missing log file, CSV parse failures
//! - **I/O Errors**: Permission denied, disk full, etc.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Operation errors are recoverable: the call is skipped and the balance is
/// left untouched. Log and I/O errors abort whatever depended on the file
/// (report generation) but never corrupt the in-memory balance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("{operation} amount must be positive, got {amount}")]
    InvalidAmount {
        /// Operation that was rejected
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds for {user}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account owner
        user: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Account opened with a balance below zero
    #[error("Initial balance for {user} must not be negative, got {balance}")]
    NegativeInitialBalance {
        /// Account owner
        user: String,
        /// The rejected opening balance
        balance: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance representable.
    #[error("Arithmetic overflow in {operation} for {user}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account owner
        user: String,
    },

    /// No transaction log exists for the account yet
    #[error("Log file not found: {path}")]
    LogNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV error while reading or writing the transaction log
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(user: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            user: user.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, user: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            user: user.to_string(),
        }
    }

    /// Create a LogNotFound error
    pub fn log_not_found(path: &std::path::Path) -> Self {
        LedgerError::LogNotFound {
            path: path.display().to_string(),
        }
    }

    /// Whether the error rejected an account operation (as opposed to a file failure)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount { .. }
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::ArithmeticOverflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { operation: "Deposit".to_string(), amount: Decimal::new(-5, 0) },
        "Deposit amount must be positive, got -5"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { user: "john_doe".to_string(), balance: Decimal::new(100, 0), requested: Decimal::new(9999, 0) },
        "Insufficient funds for john_doe: balance 100, requested 9999"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "Deposit".to_string(), user: "jane".to_string() },
        "Arithmetic overflow in Deposit for jane"
    )]
    #[case::negative_initial_balance(
        LedgerError::NegativeInitialBalance { user: "jane".to_string(), balance: Decimal::new(-1, 0) },
        "Initial balance for jane must not be negative, got -1"
    )]
    #[case::log_not_found(
        LedgerError::LogNotFound { path: "logs/jane_transactions.csv".to_string() },
        "Log file not found: logs/jane_transactions.csv"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_error_with_line(
        LedgerError::Csv { line: Some(3), message: "bad quote".to_string() },
        "CSV error at line 3: bad quote"
    )]
    #[case::csv_error_without_line(
        LedgerError::Csv { line: None, message: "bad quote".to_string() },
        "CSV error: bad quote"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        LedgerError::invalid_amount("Withdraw", Decimal::ZERO),
        LedgerError::InvalidAmount { operation: "Withdraw".to_string(), amount: Decimal::ZERO }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("jane", Decimal::ONE, Decimal::TWO),
        LedgerError::InsufficientFunds { user: "jane".to_string(), balance: Decimal::ONE, requested: Decimal::TWO }
    )]
    #[case::log_not_found(
        LedgerError::log_not_found(Path::new("logs/x_transactions.csv")),
        LedgerError::LogNotFound { path: "logs/x_transactions.csv".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(LedgerError::invalid_amount("Deposit", Decimal::ZERO), true)]
    #[case(LedgerError::insufficient_funds("a", Decimal::ZERO, Decimal::ONE), true)]
    #[case(LedgerError::arithmetic_overflow("Deposit", "a"), true)]
    #[case(LedgerError::Io { message: "x".to_string() }, false)]
    #[case(LedgerError::LogNotFound { path: "x".to_string() }, false)]
    fn test_is_rejection(#[case] error: LedgerError, #[case] expected: bool) {
        assert_eq!(error.is_rejection(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
