//! Bank ledger demo CLI
//!
//! Runs a fixed deposit/withdraw sequence against one account, appending each
//! call to the account's CSV transaction log, then renders the log as a PDF
//! report.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --user jane --initial-balance 100 --log-dir /tmp/ledger
//! cargo run -- --strict-log -vv
//! ```
//!
//! Operation outcomes and the final balance go to stdout; diagnostics from
//! `tracing` go to stderr and can be tuned with `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success (rejected deposits/withdrawals are not failures)
//! - 1: The account could not be opened or stdout could not be written

use bank_ledger::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run_demo(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
