//! Custom error types for the prepaid ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. All ledger failures are synchronous and
//! non-retryable; a failed operation leaves every account exactly as it was
//! before the call.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed input: bad account id, empty holder name, negative amount
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An account with this id already exists
    #[error("Account already exists: {account_id}")]
    AccountExists { account_id: String },

    /// No account with this id is known to the ledger
    #[error("Account not found: {account_id}")]
    AccountNotFound { account_id: String },

    /// Withdraw or transfer exceeds the available balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create an "account exists" error
    pub fn account_exists(account_id: impl Into<String>) -> Self {
        Self::AccountExists {
            account_id: account_id.into(),
        }
    }

    /// Create an "account not found" error
    pub fn account_not_found(account_id: impl Into<String>) -> Self {
        Self::AccountNotFound {
            account_id: account_id.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    /// Check if this is an insufficient-funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

// Implement From traits for common error types

impl From<crate::models::AccountIdError> for LedgerError {
    fn from(err: crate::models::AccountIdError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<crate::models::AccountValidationError> for LedgerError {
    fn from(err: crate::models::AccountValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<crate::models::MoneyParseError> for LedgerError {
    fn from(err: crate::models::MoneyParseError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
