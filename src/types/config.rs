//! Ledger configuration
//!
//! Where the per-user files live and which calls reach the transaction log.

use std::path::{Path, PathBuf};

/// Default directory for transaction logs and reports
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Which account calls produce a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogPolicy {
    /// Every deposit/withdraw call is logged, rejected ones with the unchanged balance
    #[default]
    EveryCall,
    /// Only calls that changed the balance are logged
    AcceptedOnly,
}

impl LogPolicy {
    /// Whether a call with the given outcome should be logged
    pub fn should_log(&self, accepted: bool) -> bool {
        match self {
            LogPolicy::EveryCall => true,
            LogPolicy::AcceptedOnly => accepted,
        }
    }
}

/// File locations and logging policy shared by the writer, reader and report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub log_dir: PathBuf,
    pub policy: LogPolicy,
}

impl LedgerConfig {
    pub fn new(log_dir: impl Into<PathBuf>, policy: LogPolicy) -> Self {
        LedgerConfig {
            log_dir: log_dir.into(),
            policy,
        }
    }

    /// `<log_dir>/<user>_transactions.csv`
    pub fn log_path(&self, user_id: &str) -> PathBuf {
        self.log_dir.join(format!("{}_transactions.csv", user_id))
    }

    /// `<log_dir>/<user>_transactions.pdf`
    pub fn report_path(&self, user_id: &str) -> PathBuf {
        self.log_dir.join(format!("{}_transactions.pdf", user_id))
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig::new(DEFAULT_LOG_DIR, LogPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_paths() {
        let config = LedgerConfig::default();
        assert_eq!(
            config.log_path("john_doe"),
            Path::new("logs").join("john_doe_transactions.csv")
        );
        assert_eq!(
            config.report_path("john_doe"),
            Path::new("logs").join("john_doe_transactions.pdf")
        );
        assert_eq!(config.policy, LogPolicy::EveryCall);
    }

    #[rstest]
    #[case(LogPolicy::EveryCall, true, true)]
    #[case(LogPolicy::EveryCall, false, true)]
    #[case(LogPolicy::AcceptedOnly, true, true)]
    #[case(LogPolicy::AcceptedOnly, false, false)]
    fn test_should_log(#[case] policy: LogPolicy, #[case] accepted: bool, #[case] expected: bool) {
        assert_eq!(policy.should_log(accepted), expected);
    }
}
