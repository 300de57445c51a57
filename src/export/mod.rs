//! Export module
//!
//! Read-only consumers of the ledger's snapshot views:
//! - CSV: transaction history (spreadsheet-compatible)
//! - JSON: machine-readable account snapshot
//!
//! Exporters never mutate ledger state.

pub mod csv;
pub mod json;

pub use csv::export_history_csv;
pub use json::{export_account_json, AccountExport, EXPORT_SCHEMA_VERSION};
