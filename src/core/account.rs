//! Account module
//!
//! This module provides the `Account` struct: a user identifier and a
//! balance, plus the deposit/withdraw operations that mutate it.
//!
//! Every deposit and withdrawal is routed through the account's
//! [`TransactionHook`] once the balance logic has run. Which calls reach the
//! hook is decided by the account's [`LogPolicy`]. Hook failures are reported
//! with `tracing::error!` and never fail the operation.

use crate::core::traits::TransactionHook;
use crate::io::log_writer::CsvTransactionLog;
use crate::report::{self, Report};
use crate::types::{LedgerConfig, LedgerError, LogPolicy, Operation, OperationCall};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// A single user's account
///
/// The balance equals the opening balance plus accepted deposits minus
/// accepted withdrawals, and never goes below zero.
#[derive(Debug)]
pub struct Account<H: TransactionHook = CsvTransactionLog> {
    user_id: String,
    balance: Decimal,
    policy: LogPolicy,
    hook: H,
}

impl Account<CsvTransactionLog> {
    /// Open an account whose calls are logged to `<log_dir>/<user>_transactions.csv`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeInitialBalance` if `initial_balance < 0`.
    pub fn open(
        user_id: impl Into<String>,
        initial_balance: Decimal,
        config: &LedgerConfig,
    ) -> Result<Self, LedgerError> {
        let user_id = user_id.into();
        let log = CsvTransactionLog::new(config.log_path(&user_id));
        Account::with_hook(user_id, initial_balance, config.policy, log)
    }
}

impl<H: TransactionHook> Account<H> {
    /// Open an account with a custom post-call hook
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeInitialBalance` if `initial_balance < 0`.
    pub fn with_hook(
        user_id: impl Into<String>,
        initial_balance: Decimal,
        policy: LogPolicy,
        hook: H,
    ) -> Result<Self, LedgerError> {
        let user_id = user_id.into();
        if initial_balance < Decimal::ZERO {
            return Err(LedgerError::NegativeInitialBalance {
                user: user_id,
                balance: initial_balance,
            });
        }

        Ok(Account {
            user_id,
            balance: initial_balance,
            policy,
            hook,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Current balance, no side effects
    pub fn get_balance(&self) -> Decimal {
        self.balance
    }

    pub fn policy(&self) -> LogPolicy {
        self.policy
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    /// Deposit funds
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `ArithmeticOverflow` if the balance would overflow
    ///
    /// On error the balance is unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let outcome = Self::credit(&self.user_id, self.balance, amount);
        self.settle(Operation::Deposit, amount, outcome)
    }

    /// Withdraw funds
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the balance
    ///
    /// On error the balance is unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let outcome = Self::debit(&self.user_id, self.balance, amount);
        self.settle(Operation::Withdraw, amount, outcome)
    }

    /// Render the transaction log of this account to `<log_dir>/<user>_transactions.pdf`
    ///
    /// See [`report::generate`].
    pub fn generate_report(&self, config: &LedgerConfig) -> Result<(PathBuf, Report), LedgerError> {
        report::generate(&self.user_id, self.balance, config)
    }

    fn credit(user: &str, balance: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(Operation::Deposit.name(), amount));
        }

        balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(Operation::Deposit.name(), user))
    }

    fn debit(user: &str, balance: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(Operation::Withdraw.name(), amount));
        }
        if amount > balance {
            return Err(LedgerError::insufficient_funds(user, balance, amount));
        }

        balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow(Operation::Withdraw.name(), user))
    }

    /// Apply an operation outcome, then hand the call to the hook
    fn settle(
        &mut self,
        operation: Operation,
        amount: Decimal,
        outcome: Result<Decimal, LedgerError>,
    ) -> Result<Decimal, LedgerError> {
        match &outcome {
            Ok(new_balance) => {
                self.balance = *new_balance;
                tracing::info!(
                    user = %self.user_id,
                    %operation,
                    %amount,
                    balance = %self.balance,
                    "operation applied"
                );
            }
            Err(e) => {
                tracing::warn!(user = %self.user_id, %operation, %amount, "operation rejected: {}", e);
            }
        }

        let accepted = outcome.is_ok();
        if self.policy.should_log(accepted) {
            let call = OperationCall {
                user_id: &self.user_id,
                operation,
                amount,
                accepted,
                balance: self.balance,
            };
            if let Err(e) = self.hook.after_call(&call) {
                tracing::error!(user = %self.user_id, "Error writing to log file: {}", e);
            }
        }

        outcome
    }
}
