//! Core business logic module
//!
//! This module contains the account and the hook abstraction it reports to:
//! - `traits` - Post-call hook invoked after every mutating operation
//! - `account` - Balance state and deposit/withdraw operations

pub mod account;
pub mod traits;

pub use account::Account;
pub use traits::{NoopHook, TransactionHook};
