//! Prepaid-card ledger
//!
//! This library tracks balances and categorized spending for
//! prepaid-card-style accounts: deposits, category-tagged withdrawals,
//! inter-account transfers, and transaction history for reporting. The core
//! is the ledger engine; the session, display, and export modules are thin
//! consumers of its public operations and read-only views.
//!
//! # Architecture
//!
//! - `error`: custom error types
//! - `models`: core data models (money, ids, categories, transactions, accounts)
//! - `ledger`: the account registry and transfer logic
//! - `session`: interactive login/usage/logout boundary
//! - `display`: terminal formatting
//! - `export`: read-only CSV/JSON history snapshots
//!
//! # Example
//!
//! ```rust
//! use prepaid_ledger::ledger::Ledger;
//! use prepaid_ledger::models::{AccountId, Category, Money};
//!
//! let mut ledger = Ledger::new("Campus Cards");
//! let id = AccountId::parse("1234567890")?;
//! ledger.create_account(id.clone(), "Jane Doe", Money::zero())?;
//! ledger.deposit(&id, Money::from_rupiah(50_000), Category::Deposit)?;
//! assert_eq!(ledger.balance(&id)?, Money::from_rupiah(50_000));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod session;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
