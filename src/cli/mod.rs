// CLI module
// Command-line interface, argument parsing and the demo sequence

mod args;

pub use args::{CliArgs, DEFAULT_USER};

use crate::core::{Account, TransactionHook};
use crate::types::{LedgerConfig, LedgerError, Operation};
use clap::Parser;
use rust_decimal::Decimal;
use std::io::Write;

/// Operations performed by the demo, in order
pub const DEMO_STEPS: [(Operation, i64); 4] = [
    (Operation::Deposit, 50),
    (Operation::Withdraw, 30),
    (Operation::Deposit, 100),
    (Operation::Withdraw, 60),
];

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help flag), clap will
/// display an error message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run the demo sequence and print its outcome to `output`
///
/// Opens the account described by `args`, applies [`DEMO_STEPS`], renders
/// the transaction report and prints the final balance. Rejected operations
/// and report failures are printed, not returned.
///
/// # Returns
///
/// The final balance.
///
/// # Errors
///
/// Returns an error if the account cannot be opened or `output` cannot be
/// written.
pub fn run_demo(args: &CliArgs, output: &mut dyn Write) -> Result<Decimal, LedgerError> {
    let config = args.to_config();
    let mut account = Account::open(args.user.clone(), args.initial_balance, &config)?;

    for (operation, amount) in DEMO_STEPS {
        apply_step(&mut account, operation, Decimal::new(amount, 0), output)?;
    }

    write_report(&account, &config, output)?;

    let balance = account.get_balance();
    writeln!(output, "Final balance: {}", balance)?;
    Ok(balance)
}

/// Apply one operation and print its outcome
pub fn apply_step<H: TransactionHook>(
    account: &mut Account<H>,
    operation: Operation,
    amount: Decimal,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let result = match operation {
        Operation::Deposit => account.deposit(amount),
        Operation::Withdraw => account.withdraw(amount),
    };

    match (operation, result) {
        (Operation::Deposit, Ok(balance)) => {
            writeln!(output, "Deposited {}. New balance: {}", amount, balance)?
        }
        (Operation::Withdraw, Ok(balance)) => {
            writeln!(output, "Withdrew {}. New balance: {}", amount, balance)?
        }
        (Operation::Deposit, Err(LedgerError::InvalidAmount { .. })) => {
            writeln!(output, "Deposit amount must be positive.")?
        }
        (Operation::Withdraw, Err(LedgerError::InvalidAmount { .. })) => {
            writeln!(output, "Withdrawal amount must be positive.")?
        }
        (_, Err(LedgerError::InsufficientFunds { .. })) => writeln!(output, "Insufficient funds")?,
        (_, Err(e)) => writeln!(output, "{} failed: {}", operation, e)?,
    }

    Ok(())
}

fn write_report<H: TransactionHook>(
    account: &Account<H>,
    config: &LedgerConfig,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match account.generate_report(config) {
        Ok((path, _)) => writeln!(output, "PDF generated: {}", path.display())?,
        Err(e @ LedgerError::LogNotFound { .. }) => writeln!(output, "{}", e)?,
        Err(e) => writeln!(output, "Error generating PDF: {}", e)?,
    }
    Ok(())
}
