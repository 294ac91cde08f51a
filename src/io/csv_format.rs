//! CSV format handling for the transaction log
//!
//! This module centralizes all CSV format concerns, providing:
//! - The header row written at the top of every log file
//! - Conversion from [`LogRecord`] to the string row that is written
//! - Validation of rows read back from disk
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::LogRecord;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Header row of every transaction log
pub const LOG_HEADER: [&str; 5] = [
    "Date",
    "Transaction",
    "Arguments",
    "Keyword Arguments",
    "Balance",
];

/// One log row as stored on disk
///
/// Fields are kept as text: the report replays exactly what was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Transaction")]
    pub transaction: String,
    #[serde(rename = "Arguments")]
    pub arguments: String,
    #[serde(rename = "Keyword Arguments")]
    pub keyword_arguments: String,
    #[serde(rename = "Balance")]
    pub balance: String,
}

impl From<&LogRecord> for LogRow {
    fn from(record: &LogRecord) -> Self {
        LogRow {
            date: record.formatted_timestamp(),
            transaction: record.operation.name().to_string(),
            arguments: record.arguments.clone(),
            keyword_arguments: record.keyword_arguments.clone(),
            balance: record.balance.to_string(),
        }
    }
}

/// Convert a raw CSV row into a [`LogRow`]
///
/// # Returns
///
/// * `Ok(LogRow)` - The row has exactly five columns
/// * `Err(String)` - Description of the malformed row
pub fn parse_log_row(record: &StringRecord) -> Result<LogRow, String> {
    if record.len() != LOG_HEADER.len() {
        return Err(format!(
            "expected {} columns, found {}: {:?}",
            LOG_HEADER.len(),
            record.len(),
            record.iter().collect::<Vec<_>>()
        ));
    }

    Ok(LogRow {
        date: record[0].to_string(),
        transaction: record[1].to_string(),
        arguments: record[2].to_string(),
        keyword_arguments: record[3].to_string(),
        balance: record[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Operation, OperationCall};
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[test]
    fn test_log_row_from_record() {
        let call = OperationCall {
            user_id: "john_doe",
            operation: Operation::Deposit,
            amount: Decimal::new(50, 0),
            accepted: true,
            balance: Decimal::new(150, 0),
        };
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(13, 4, 5)
            .unwrap();

        let row = LogRow::from(&LogRecord::from_call(&call, timestamp));
        assert_eq!(
            row,
            LogRow {
                date: "2024-01-02 13:04:05".to_string(),
                transaction: "Deposit".to_string(),
                arguments: "50".to_string(),
                keyword_arguments: "No kwargs".to_string(),
                balance: "150".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_log_row_valid() {
        let record = StringRecord::from(vec![
            "2024-01-02 13:04:05",
            "Withdraw",
            "30",
            "No kwargs",
            "120",
        ]);

        let row = parse_log_row(&record).unwrap();
        assert_eq!(row.transaction, "Withdraw");
        assert_eq!(row.balance, "120");
    }

    #[rstest]
    #[case::too_few(vec!["2024-01-02 13:04:05", "Deposit", "50"])]
    #[case::too_many(vec!["a", "b", "c", "d", "e", "f"])]
    #[case::empty(vec![])]
    fn test_parse_log_row_wrong_column_count(#[case] fields: Vec<&str>) {
        let record = StringRecord::from(fields);
        let result = parse_log_row(&record);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("expected 5 columns"));
    }
}
