//! Append-only transaction log writer
//!
//! [`CsvTransactionLog`] is the default post-call hook of an account. Each
//! call appends one row to `<log_dir>/<user>_transactions.csv`, creating the
//! directory and writing the header row the first time.
//!
//! The file is opened, written and closed within a single call; no handle is
//! kept between operations.

use crate::core::traits::TransactionHook;
use crate::io::csv_format::{LogRow, LOG_HEADER};
use crate::types::{LedgerError, LogRecord, OperationCall};
use chrono::{Local, NaiveDateTime};
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Source of timestamps for new log records
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Transaction log backed by a per-user CSV file
#[derive(Debug, Clone)]
pub struct CsvTransactionLog {
    path: PathBuf,
    clock: Clock,
}

impl CsvTransactionLog {
    /// Create a log writing to `path`, stamping records with local time
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvTransactionLog {
            path: path.into(),
            clock: local_now,
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single record to the log
    ///
    /// Creates the parent directory if missing and writes the header row when
    /// the file is new or empty.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if the directory or file cannot be created or
    /// written, and `LedgerError::Csv` if serialization fails.
    pub fn append(&self, record: &LogRecord) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let needs_header = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if needs_header {
            writer.write_record(LOG_HEADER)?;
        }
        writer.serialize(LogRow::from(record))?;
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            operation = %record.operation,
            balance = %record.balance,
            "appended transaction log record"
        );

        Ok(())
    }
}

impl TransactionHook for CsvTransactionLog {
    fn after_call(&mut self, call: &OperationCall<'_>) -> Result<(), LedgerError> {
        let record = LogRecord::from_call(call, (self.clock)());
        self.append(&record)
    }
}
