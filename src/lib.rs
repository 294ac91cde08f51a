//! Bank Ledger Library
//! # Overview
//!
//! A single-account ledger whose every deposit and withdrawal is appended to a
//! per-user CSV transaction log, with a PDF report replayed from that log.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (log records, configuration, errors)
//! - [`cli`] - CLI arguments parsing and the demo sequence
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Balance state and deposit/withdraw operations
//!   - [`core::traits`] - Post-call hook composed around every mutating operation
//! - [`io`] - Transaction log format, append-only writer and streaming reader
//! - [`report`] - Report content and PDF rendering
//!
//! # Log Format
//!
//! One file per user, `<log_dir>/<user>_transactions.csv`:
//!
//! ```text
//! Date,Transaction,Arguments,Keyword Arguments,Balance
//! 2024-01-01 10:00:00,Deposit,50,No kwargs,50
//! 2024-01-01 10:00:00,Withdraw,30,No kwargs,20
//! ```
//!
//! Each row records the balance right after the call. By default rejected
//! calls are logged too, with the unchanged balance; see [`types::LogPolicy`].

pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod types;

pub use self::core::{Account, NoopHook, TransactionHook};
pub use io::CsvTransactionLog;
pub use report::Report;
pub use types::{LedgerConfig, LedgerError, LogPolicy, LogRecord, Operation, OperationCall};
