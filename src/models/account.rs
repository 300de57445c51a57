//! Account model
//!
//! An account owns a non-negative balance and the append-only history of
//! transactions that produced it. The balance is stored redundantly for
//! O(1) reads and updated in lockstep with the history: every mutation goes
//! through [`Account::record`], so `balance == sum(history)` at all times.

use serde::Serialize;
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

use super::category::Category;
use super::ids::AccountId;
use super::money::Money;
use super::transaction::Transaction;

/// A balance-holding account with an append-only transaction history
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique identifier (10-digit card number)
    account_id: AccountId,

    /// Full name of the account holder
    holder_name: String,

    /// Current balance, always non-negative
    balance: Money,

    /// Transaction history, insertion order = chronological order
    history: Vec<Transaction>,
}

impl Account {
    /// Create a new account with a zero balance and empty history
    pub fn new(account_id: AccountId, holder_name: impl Into<String>) -> Self {
        Self {
            account_id,
            holder_name: holder_name.into(),
            balance: Money::zero(),
            history: Vec::new(),
        }
    }

    /// The account identifier
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// The holder's full name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// The current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The transaction history in chronological order
    ///
    /// This is a snapshot view; callers may re-read it repeatedly.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Add funds to the account
    ///
    /// Zero is a valid deposit and still records a zero-amount transaction.
    /// Negative amounts are a caller contract violation.
    pub fn deposit(&mut self, amount: Money, category: Category) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidInput(format!(
                "Deposit amount must not be negative (got {})",
                amount
            )));
        }
        self.record(amount, category);
        Ok(())
    }

    /// Remove funds from the account
    ///
    /// Fails with [`LedgerError::InsufficientFunds`] when the amount exceeds
    /// the balance; in that case neither balance nor history changes.
    pub fn withdraw(&mut self, amount: Money, category: Category) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidInput(format!(
                "Withdrawal amount must not be negative (got {})",
                amount
            )));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.record(-amount, category);
        Ok(())
    }

    /// Append a transaction and adjust the balance in one step
    ///
    /// The only place balance and history change, which keeps
    /// `balance == sum(history)` an invariant rather than a convention.
    fn record(&mut self, amount: Money, category: Category) {
        self.balance += amount;
        self.history.push(Transaction::new(amount, category));
    }

    /// Validate the holder name
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.holder_name.trim().is_empty() {
            return Err(AccountValidationError::EmptyHolderName);
        }

        if !self
            .holder_name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
        {
            return Err(AccountValidationError::InvalidHolderName(
                self.holder_name.clone(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.holder_name, self.account_id)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyHolderName,
    InvalidHolderName(String),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHolderName => write!(f, "Holder name cannot be empty"),
            Self::InvalidHolderName(name) => write!(
                f,
                "Holder name may only contain letters, spaces, and hyphens: '{}'",
                name
            ),
        }
    }
}

impl std::error::Error for AccountValidationError {}
