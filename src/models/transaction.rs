//! Transaction model
//!
//! A transaction is one immutable signed balance change. Fields are private
//! and exposed through read accessors only; once recorded by an account, a
//! transaction is never shared or mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// An immutable record of a single balance change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount (positive for credits, negative for debits)
    amount: Money,

    /// When the transaction occurred (displayed at second resolution)
    timestamp: DateTime<Utc>,

    /// What the balance change was for
    category: Category,
}

impl Transaction {
    /// Record a new transaction stamped with the current time
    pub fn new(amount: Money, category: Category) -> Self {
        Self {
            amount,
            timestamp: Utc::now(),
            category,
        }
    }

    /// Create a transaction with an explicit timestamp
    pub fn at(amount: Money, timestamp: DateTime<Utc>, category: Category) -> Self {
        Self {
            amount,
            timestamp,
            category,
        }
    }

    /// The signed amount of this balance change
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// When the transaction occurred
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The category label
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Check if this is a credit (positive amount)
    pub fn is_credit(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is a debit (negative amount)
    pub fn is_debit(&self) -> bool {
        self.amount.is_negative()
    }

    /// The timestamp formatted at second resolution
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} IDR at {}",
            self.category,
            self.amount,
            self.timestamp_display()
        )
    }
}
