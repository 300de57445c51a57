//! CSV export functionality
//!
//! Exports an account's transaction history in spreadsheet-compatible form.
//! Export reads the ledger's snapshot views and never mutates them.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Account;

/// Export an account's transaction history to CSV
///
/// One row per transaction: timestamp, category, signed amount with two
/// decimals, followed by a closing balance row.
pub fn export_history_csv<W: Write>(account: &Account, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Timestamp", "Category", "Amount (IDR)"])?;

    for txn in account.history() {
        csv_writer.write_record([
            txn.timestamp_display(),
            txn.category().label().to_string(),
            txn.amount().to_string(),
        ])?;
    }

    csv_writer.write_record(["", "Balance", &account.balance().to_string()])?;
    csv_writer.flush()?;

    Ok(())
}
