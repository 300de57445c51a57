//! Transaction display formatting
//!
//! Provides utilities for formatting transaction history for terminal
//! display, including the usage-history register with a running balance.

use crate::models::{Money, Transaction};

/// Format a single transaction for display (history row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:22} {:>16}",
        txn.timestamp_display(),
        truncate(txn.category().label(), 22),
        txn.amount().to_string()
    )
}

/// Format a history as a register with a closing balance line
pub fn format_history_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:19} {:22} {:>16}\n",
        "Timestamp", "Category", "Amount (IDR)"
    ));
    output.push_str(&"-".repeat(59));
    output.push('\n');

    let mut running_balance = Money::zero();
    for txn in transactions {
        running_balance += txn.amount();
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output.push_str(&"-".repeat(59));
    output.push('\n');
    output.push_str(&format!(
        "{:>42} {:>16}\n",
        "Balance:",
        running_balance.to_string()
    ));

    output
}

/// Format the remaining-balance banner shown after every mutation
pub fn format_balance_banner(balance: Money) -> String {
    format!("Remaining Balance: {}", balance.format_idr())
}

/// Truncate a string to a maximum number of characters
///
/// Counts characters, not bytes; category labels are user-supplied free
/// text and may contain multibyte characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
