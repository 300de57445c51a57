//! JSON export functionality
//!
//! Exports an account snapshot (identity, balance, full history) to JSON
//! with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Account;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Account snapshot export structure
#[derive(Debug, Clone, Serialize)]
pub struct AccountExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// The account with its full history
    pub account: &'a Account,

    /// Number of transactions in the snapshot
    pub transaction_count: usize,
}

/// Export an account snapshot to pretty-printed JSON
pub fn export_account_json<W: Write>(account: &Account, writer: W) -> LedgerResult<()> {
    let export = AccountExport {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at: Utc::now(),
        account,
        transaction_count: account.history().len(),
    };

    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
