//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts and transaction history for
//! terminal display. Everything here is read-only over the ledger's views.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::{format_balance_banner, format_history_register, format_transaction_row};
