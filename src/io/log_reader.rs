//! Transaction log reader with iterator interface
//!
//! Streams the rows of a per-user transaction log back from disk. The header
//! row is skipped. Rows with the wrong number of columns are yielded as
//! [`LogEntry::Malformed`] so callers can skip them; failures of the
//! underlying reader are yielded as errors.
//!
//! ```no_run
//! use bank_ledger::io::log_reader::{LogEntry, LogReader};
//! use std::path::Path;
//!
//! let reader = LogReader::open(Path::new("logs/john_doe_transactions.csv")).unwrap();
//! for entry in reader {
//!     match entry {
//!         Ok(LogEntry::Row(row)) => println!("{} -> {}", row.transaction, row.balance),
//!         Ok(LogEntry::Malformed { line, reason }) => eprintln!("line {}: {}", line, reason),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{parse_log_row, LogRow};
use crate::types::LedgerError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// One item read from the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A well-formed five column row
    Row(LogRow),
    /// A row that could not be interpreted
    Malformed {
        /// 1-based line number in the file
        line: u64,
        reason: String,
    },
}

/// Streaming reader over a transaction log
#[derive(Debug)]
pub struct LogReader {
    reader: csv::Reader<File>,
    record: StringRecord,
}

impl LogReader {
    /// Open the log at `path`
    ///
    /// # Errors
    ///
    /// * `LedgerError::LogNotFound` if the file does not exist
    /// * `LedgerError::Io` for any other open failure
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::log_not_found(path),
            _ => LedgerError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            record: StringRecord::new(),
        })
    }

    /// Read the whole log, keeping only well-formed rows
    ///
    /// Malformed rows are reported with `tracing::warn!` and dropped.
    ///
    /// # Returns
    ///
    /// The well-formed rows in file order and the number of rows dropped.
    pub fn read_rows(self) -> Result<(Vec<LogRow>, usize), LedgerError> {
        let mut rows = Vec::new();
        let mut skipped = 0;
        for entry in self {
            match entry? {
                LogEntry::Row(row) => rows.push(row),
                LogEntry::Malformed { line, reason } => {
                    tracing::warn!(line, "Skipping malformed row: {}", reason);
                    skipped += 1;
                }
            }
        }
        Ok((rows, skipped))
    }
}

impl Iterator for LogReader {
    type Item = Result<LogEntry, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map_or(0, |p| p.line());
                Some(Ok(match parse_log_row(&self.record) {
                    Ok(row) => LogEntry::Row(row),
                    Err(reason) => LogEntry::Malformed { line, reason },
                }))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
