//! Interactive session boundary
//!
//! Wraps the ledger in the register/login, card-usage, and logout flow. The
//! session owns the ledger and the id of the active account explicitly; on
//! logout the whole ledger is discarded and replaced with a fresh one. All
//! ledger errors are rendered as user-facing messages here; the core never
//! interacts with the user.

use std::fs::File;

use crate::display::{
    format_account_details, format_account_list, format_balance_banner, format_history_register,
};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_account_json, export_history_csv};
use crate::ledger::Ledger;
use crate::models::{AccountId, Category, Money};

/// Result of executing one session command
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user; the session continues
    Message(String),
    /// The user asked to end the session
    Quit,
}

/// An interactive session over one ledger
pub struct Session {
    ledger: Ledger,
    active: Option<AccountId>,
}

impl Session {
    /// Start a session with a fresh ledger
    pub fn new(ledger_name: impl Into<String>) -> Self {
        Self {
            ledger: Ledger::new(ledger_name),
            active: None,
        }
    }

    /// Read-only access to the ledger, for embedding and tests
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Execute one command line and produce a reply
    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::Message(String::new());
        }

        let mut parts = line.split_whitespace();
        // Non-empty after trim, so a first token exists
        let command = parts.next().unwrap_or_default().to_lowercase();
        let rest: Vec<&str> = parts.collect();

        if command == "quit" || command == "exit" {
            return Reply::Quit;
        }

        let result = match command.as_str() {
            "help" => Ok(Self::help_text()),
            "open" => self.cmd_open(&rest),
            "deposit" => self.cmd_deposit(&rest),
            "spend" => self.cmd_spend(&rest),
            "transfer" => self.cmd_transfer(&rest),
            "balance" => self.cmd_balance(),
            "history" => self.cmd_history(),
            "account" => self.cmd_account(),
            "accounts" => self.cmd_accounts(),
            "export" => self.cmd_export(&rest),
            "logout" => self.cmd_logout(),
            _ => Err(LedgerError::InvalidInput(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                command
            ))),
        };

        match result {
            Ok(message) => Reply::Message(message),
            Err(err) => Reply::Message(err.to_string()),
        }
    }

    fn cmd_open(&mut self, args: &[&str]) -> LedgerResult<String> {
        let (id_arg, holder_parts) = args.split_first().ok_or_else(|| {
            LedgerError::InvalidInput("Usage: open <10-digit id> <holder name>".into())
        })?;
        if holder_parts.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Usage: open <10-digit id> <holder name>".into(),
            ));
        }

        let account_id = AccountId::parse(id_arg)?;
        let holder_name = holder_parts.join(" ");

        let account = self
            .ledger
            .create_account(account_id.clone(), &holder_name, Money::zero())?;
        let message = format!("Account created. Logged in as {}.", account);

        self.active = Some(account_id);
        Ok(message)
    }

    fn cmd_deposit(&mut self, args: &[&str]) -> LedgerResult<String> {
        let amount_arg = args
            .first()
            .ok_or_else(|| LedgerError::InvalidInput("Usage: deposit <amount>".into()))?;
        let amount = Money::parse(amount_arg)?;

        let account_id = self.active_id()?.clone();
        self.ledger.deposit(&account_id, amount, Category::Deposit)?;
        Ok(format_balance_banner(self.ledger.balance(&account_id)?))
    }

    fn cmd_spend(&mut self, args: &[&str]) -> LedgerResult<String> {
        let (amount_arg, category_parts) = args.split_first().ok_or_else(|| {
            LedgerError::InvalidInput("Usage: spend <amount> <category>".into())
        })?;
        let amount = Money::parse(amount_arg)?;
        let category = Category::parse(&category_parts.join(" ")).ok_or_else(|| {
            LedgerError::InvalidInput("Usage: spend <amount> <category>".into())
        })?;

        let account_id = self.active_id()?.clone();
        self.ledger.withdraw(&account_id, amount, category)?;
        Ok(format_balance_banner(self.ledger.balance(&account_id)?))
    }

    fn cmd_transfer(&mut self, args: &[&str]) -> LedgerResult<String> {
        let [to_arg, amount_arg] = args else {
            return Err(LedgerError::InvalidInput(
                "Usage: transfer <to-id> <amount>".into(),
            ));
        };
        let to = AccountId::parse(to_arg)?;
        let amount = Money::parse(amount_arg)?;

        let from = self.active_id()?.clone();
        self.ledger.transfer_funds(&from, &to, amount)?;
        Ok(format!(
            "Transferred {} to {}. {}",
            amount.format_idr(),
            to,
            format_balance_banner(self.ledger.balance(&from)?)
        ))
    }

    fn cmd_balance(&self) -> LedgerResult<String> {
        let account_id = self.active_id()?;
        Ok(format_balance_banner(self.ledger.balance(account_id)?))
    }

    fn cmd_history(&self) -> LedgerResult<String> {
        let account_id = self.active_id()?;
        Ok(format_history_register(self.ledger.history(account_id)?))
    }

    fn cmd_account(&self) -> LedgerResult<String> {
        let account_id = self.active_id()?;
        Ok(format_account_details(self.ledger.get_account(account_id)?))
    }

    fn cmd_accounts(&self) -> LedgerResult<String> {
        Ok(format_account_list(self.ledger.accounts()))
    }

    fn cmd_export(&self, args: &[&str]) -> LedgerResult<String> {
        let [format, path] = args else {
            return Err(LedgerError::InvalidInput(
                "Usage: export <csv|json> <path>".into(),
            ));
        };

        let account_id = self.active_id()?;
        let account = self.ledger.get_account(account_id)?;
        let file = File::create(path)?;

        match *format {
            "csv" => export_history_csv(account, file)?,
            "json" => export_account_json(account, file)?,
            other => {
                return Err(LedgerError::InvalidInput(format!(
                    "Unknown export format '{}'. Use 'csv' or 'json'.",
                    other
                )))
            }
        }

        Ok(format!("Exported history of {} to {}", account_id, path))
    }

    fn cmd_logout(&mut self) -> LedgerResult<String> {
        // Deliberate reset: the whole ledger is discarded, not individual
        // accounts
        self.ledger = Ledger::new(self.ledger.name().to_string());
        self.active = None;
        Ok("Logged out. All accounts discarded.".to_string())
    }

    fn active_id(&self) -> LedgerResult<&AccountId> {
        self.active.as_ref().ok_or_else(|| {
            LedgerError::InvalidInput(
                "No active account. Run 'open <10-digit id> <holder name>' first.".into(),
            )
        })
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  open <id> <holder name>   Create an account and log in",
            "  deposit <amount>          Add money to the active account",
            "  spend <amount> <category> Use money (e.g. 'spend 20000 Supermarket')",
            "  transfer <to-id> <amount> Move funds to another account",
            "  balance                   Show the remaining balance",
            "  history                   Show the transaction history",
            "  account                   Show the active account's details",
            "  accounts                  List all accounts in the ledger",
            "  export <csv|json> <path>  Write a read-only history snapshot",
            "  logout                    Discard the ledger and start fresh",
            "  quit                      End the session",
        ]
        .join("\n")
    }
}
