//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `config`: File locations and logging policy
//! - `record`: Operations and transaction log records
//! - `error`: Error types for the ledger

pub mod config;
pub mod error;
pub mod record;

pub use config::{LedgerConfig, LogPolicy, DEFAULT_LOG_DIR};
pub use error::LedgerError;
pub use record::{LogRecord, Operation, OperationCall, TIMESTAMP_FORMAT};
