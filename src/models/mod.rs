//! Core data models for the prepaid ledger
//!
//! This module contains the data structures that represent the domain:
//! money amounts, account identifiers, categories, transactions, accounts.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountValidationError};
pub use category::Category;
pub use ids::{AccountId, AccountIdError, ACCOUNT_ID_LEN};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
