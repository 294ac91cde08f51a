//! Transaction report generation
//!
//! A report is rebuilt from the per-user transaction log every time it is
//! generated; the log stays the source of truth. The report consists of:
//!
//! - a centred title, `Transactions for <user>`
//! - `Starting Balance: <b>`, the balance recorded in the first log row, or
//!   the account's current balance when the log has no rows
//! - one line per well-formed log row
//!
//! Malformed log rows are skipped with a warning. The rendered PDF overwrites
//! `<log_dir>/<user>_transactions.pdf`.

pub mod pdf;

use crate::io::csv_format::LogRow;
use crate::io::log_reader::LogReader;
use crate::types::{LedgerConfig, LedgerError};
use self::pdf::Line;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

/// Report content, independent of the output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub starting_balance: String,
    pub entries: Vec<String>,
    /// Number of malformed log rows left out
    pub skipped_rows: usize,
}

impl Report {
    /// Build a report from the log at `log_path`
    ///
    /// # Errors
    ///
    /// * `LedgerError::LogNotFound` if the log does not exist
    /// * `LedgerError::Io` / `LedgerError::Csv` if the log cannot be read
    pub fn from_log(
        user_id: &str,
        current_balance: Decimal,
        log_path: &Path,
    ) -> Result<Self, LedgerError> {
        let (rows, skipped_rows) = LogReader::open(log_path)?.read_rows()?;
        Ok(Report::from_rows(user_id, current_balance, &rows, skipped_rows))
    }

    /// Build a report from rows already read
    pub fn from_rows(
        user_id: &str,
        current_balance: Decimal,
        rows: &[LogRow],
        skipped_rows: usize,
    ) -> Self {
        let starting_balance = rows
            .first()
            .map(|row| row.balance.clone())
            .unwrap_or_else(|| current_balance.to_string());

        Report {
            title: format!("Transactions for {}", user_id),
            starting_balance,
            entries: rows.iter().map(format_entry).collect(),
            skipped_rows,
        }
    }

    /// Document lines in display order
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(self.entries.len() + 4);
        lines.push(Line::centered(self.title.clone()));
        lines.push(Line::Blank);
        lines.push(Line::left(format!(
            "Starting Balance: {}",
            self.starting_balance
        )));
        lines.push(Line::Blank);
        lines.extend(self.entries.iter().map(|entry| Line::left(entry.clone())));
        lines
    }

    pub fn to_pdf(&self) -> Vec<u8> {
        pdf::render(&self.lines())
    }
}

fn format_entry(row: &LogRow) -> String {
    format!(
        "{} - {}: args={} kwargs={} balance={}",
        row.date, row.transaction, row.arguments, row.keyword_arguments, row.balance
    )
}

/// Regenerate the report for `user_id` and write it next to the log
///
/// # Returns
///
/// The path written and the report content.
///
/// # Errors
///
/// Any error reading the log or writing the PDF. Nothing is written when the
/// log cannot be read.
pub fn generate(
    user_id: &str,
    current_balance: Decimal,
    config: &LedgerConfig,
) -> Result<(PathBuf, Report), LedgerError> {
    let log_path = config.log_path(user_id);
    let report = Report::from_log(user_id, current_balance, &log_path)?;

    let output_path = config.report_path(user_id);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&output_path, report.to_pdf())?;

    tracing::info!(
        path = %output_path.display(),
        entries = report.entries.len(),
        skipped = report.skipped_rows,
        "report generated"
    );

    Ok((output_path, report))
}
