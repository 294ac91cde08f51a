//! Core traits for the account's post-call hook
//!
//! Recording a call is a cross-cutting concern composed around every
//! mutating account operation. The account owns a [`TransactionHook`] and
//! invokes it after each deposit or withdrawal, so the transaction log (or a
//! test double) can be swapped without touching the balance logic.

use crate::types::{LedgerError, OperationCall};

/// Hook invoked after every mutating account operation
pub trait TransactionHook {
    /// Record a finished call
    ///
    /// Errors are reported by the account and never undo the balance change.
    fn after_call(&mut self, call: &OperationCall<'_>) -> Result<(), LedgerError>;
}

/// Hook that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl TransactionHook for NoopHook {
    fn after_call(&mut self, _call: &OperationCall<'_>) -> Result<(), LedgerError> {
        Ok(())
    }
}

impl<H: TransactionHook + ?Sized> TransactionHook for Box<H> {
    fn after_call(&mut self, call: &OperationCall<'_>) -> Result<(), LedgerError> {
        (**self).after_call(call)
    }
}
