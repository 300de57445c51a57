//! Account display formatting
//!
//! Renders account listings as tables and single-account detail blocks.

use tabled::{Table, Tabled};

use crate::models::Account;

/// One row of the account listing table
#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Account ID")]
    account_id: String,
    #[tabled(rename = "Holder")]
    holder: String,
    #[tabled(rename = "Balance (IDR)")]
    balance: String,
    #[tabled(rename = "Transactions")]
    transactions: usize,
}

/// Format all accounts as a table
pub fn format_account_list<'a>(accounts: impl Iterator<Item = &'a Account>) -> String {
    let rows: Vec<AccountRow> = accounts
        .map(|account| AccountRow {
            account_id: account.account_id().to_string(),
            holder: account.holder_name().to_string(),
            balance: account.balance().to_string(),
            transactions: account.history().len(),
        })
        .collect();

    if rows.is_empty() {
        return "No accounts in the ledger.\n".to_string();
    }

    let mut table = Table::new(rows).to_string();
    table.push('\n');
    table
}

/// Format account details for display
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account:      {}\n", account.account_id()));
    output.push_str(&format!("Holder:       {}\n", account.holder_name()));
    output.push_str(&format!("Balance:      {}\n", account.balance().format_idr()));
    output.push_str(&format!("Transactions: {}\n", account.history().len()));
    output
}
