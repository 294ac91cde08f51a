//! Operation and log record types
//!
//! An [`OperationCall`] describes one finished deposit or withdrawal as seen
//! by the post-call hook. A [`LogRecord`] is the row that call becomes in the
//! per-user transaction log.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

/// Timestamp layout used in the transaction log
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder written when a call carried no positional arguments
pub const NO_ARGS: &str = "No args";

/// Placeholder written when a call carried no keyword arguments
pub const NO_KWARGS: &str = "No kwargs";

/// Mutating operations an account exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Credit funds to the account
    Deposit,
    /// Debit funds from the account
    Withdraw,
}

impl Operation {
    /// Capitalised operation name as written to the log
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Deposit => "Deposit",
            Operation::Withdraw => "Withdraw",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finished account operation, handed to the post-call hook
#[derive(Debug, Clone, PartialEq)]
pub struct OperationCall<'a> {
    /// Owner of the account the call ran against
    pub user_id: &'a str,
    pub operation: Operation,
    /// Amount passed by the caller
    pub amount: Decimal,
    /// Whether the balance was changed
    pub accepted: bool,
    /// Balance after the call (unchanged if rejected)
    pub balance: Decimal,
}

/// One row of the transaction log
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub operation: Operation,
    /// Positional arguments, comma separated, or [`NO_ARGS`]
    pub arguments: String,
    /// `key=value` pairs, comma separated, or [`NO_KWARGS`]
    pub keyword_arguments: String,
    /// Balance right after the operation
    pub balance: Decimal,
}

impl LogRecord {
    /// Build the log row for a finished call
    pub fn from_call(call: &OperationCall<'_>, timestamp: NaiveDateTime) -> Self {
        LogRecord {
            timestamp,
            operation: call.operation,
            arguments: format_arguments(&[call.amount]),
            keyword_arguments: format_keyword_arguments::<Decimal>(&[]),
            balance: call.balance,
        }
    }

    /// Timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Join positional arguments for the log
pub fn format_arguments<T: fmt::Display>(args: &[T]) -> String {
    if args.is_empty() {
        return NO_ARGS.to_string();
    }
    args.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join keyword arguments for the log
pub fn format_keyword_arguments<T: fmt::Display>(kwargs: &[(&str, T)]) -> String {
    if kwargs.is_empty() {
        return NO_KWARGS.to_string();
    }
    kwargs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
