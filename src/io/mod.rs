//! I/O module
//!
//! Handles the per-user transaction log on disk.
//!
//! # Components
//!
//! - `csv_format` - Log row format (header, record conversion, validation)
//! - `log_writer` - Append-only writer, used as the account's post-call hook
//! - `log_reader` - Streaming reader with an iterator interface

pub mod csv_format;
pub mod log_reader;
pub mod log_writer;

pub use csv_format::{parse_log_row, LogRow, LOG_HEADER};
pub use log_reader::{LogEntry, LogReader};
pub use log_writer::{Clock, CsvTransactionLog};
