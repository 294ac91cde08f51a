use crate::types::{LedgerConfig, LogPolicy, DEFAULT_LOG_DIR};
use clap::{ArgAction, Parser};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// User the demo runs against when none is given
pub const DEFAULT_USER: &str = "john_doe";

/// Run the bank ledger demo: a fixed deposit/withdraw sequence, then a report
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Run a demo deposit/withdraw sequence and render its transaction report", long_about = None)]
pub struct CliArgs {
    /// Account owner, also used to name the log and report files
    #[arg(long = "user", value_name = "USER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Opening balance of the account
    #[arg(long = "initial-balance", value_name = "AMOUNT", default_value = "0")]
    pub initial_balance: Decimal,

    /// Directory holding transaction logs and reports
    #[arg(long = "log-dir", value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Only log calls that changed the balance
    #[arg(long = "strict-log")]
    pub strict_log: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Ledger configuration described by the arguments
    pub fn to_config(&self) -> LedgerConfig {
        let policy = if self.strict_log {
            LogPolicy::AcceptedOnly
        } else {
            LogPolicy::EveryCall
        };
        LedgerConfig::new(self.log_dir.clone(), policy)
    }

    /// Default `tracing` filter directive for the verbosity level
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_reproduce_demo() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.user, "john_doe");
        assert_eq!(parsed.initial_balance, Decimal::ZERO);
        assert_eq!(parsed.log_dir, PathBuf::from("logs"));
        assert_eq!(parsed.to_config(), LedgerConfig::default());
    }

    #[rstest]
    #[case::user(&["program", "--user", "jane"], "jane", Decimal::ZERO)]
    #[case::balance(&["program", "--initial-balance", "100.50"], "john_doe", Decimal::new(10050, 2))]
    #[case::both(&["program", "--user", "x", "--initial-balance", "7"], "x", Decimal::new(7, 0))]
    fn test_account_options(
        #[case] args: &[&str],
        #[case] user: &str,
        #[case] balance: Decimal,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.user, user);
        assert_eq!(parsed.initial_balance, balance);
    }

    #[rstest]
    #[case::default(&["program"], LogPolicy::EveryCall)]
    #[case::strict(&["program", "--strict-log"], LogPolicy::AcceptedOnly)]
    fn test_log_policy(#[case] args: &[&str], #[case] expected: LogPolicy) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_config().policy, expected);
    }

    #[rstest]
    #[case(&["program"], "warn")]
    #[case(&["program", "-v"], "info")]
    #[case(&["program", "-vv"], "debug")]
    #[case(&["program", "--verbose", "--verbose", "--verbose"], "debug")]
    fn test_log_filter(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_filter(), expected);
    }

    #[rstest]
    #[case::bad_balance(&["program", "--initial-balance", "lots"])]
    #[case::unknown_flag(&["program", "--amount", "5"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
