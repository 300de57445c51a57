//! The ledger: registry of all known accounts
//!
//! Owns the set of accounts keyed by account id and exposes the operations
//! the presentation and export layers consume: account creation, lookup,
//! deposits, withdrawals, and atomic inter-account transfers. Every failure
//! leaves all accounts exactly as they were before the call.

use std::collections::BTreeMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Category, Money, Transaction};

/// The registry of all known accounts, keyed by unique identifier
///
/// Iteration order is sorted by account id so listings and reports are
/// deterministic. The ledger lives for one session and is replaced wholesale
/// on logout; accounts are never deleted individually.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Descriptive name, non-semantic
    name: String,

    /// All accounts, keys unique
    accounts: BTreeMap<AccountId, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: BTreeMap::new(),
        }
    }

    /// The ledger's descriptive name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of accounts in the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the ledger has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Create a new account
    ///
    /// Fails with [`LedgerError::AccountExists`] if the id is already
    /// present (the existing account is untouched) and with
    /// [`LedgerError::InvalidInput`] for a malformed holder name or a
    /// negative initial balance. A positive initial balance is recorded as
    /// an opening `Deposit` transaction so the balance always equals the sum
    /// of the history.
    pub fn create_account(
        &mut self,
        account_id: AccountId,
        holder_name: &str,
        initial_balance: Money,
    ) -> LedgerResult<&Account> {
        if self.accounts.contains_key(&account_id) {
            return Err(LedgerError::account_exists(account_id.as_str()));
        }
        if initial_balance.is_negative() {
            return Err(LedgerError::InvalidInput(format!(
                "Initial balance must not be negative (got {})",
                initial_balance
            )));
        }

        let mut account = Account::new(account_id.clone(), holder_name);
        account.validate()?;
        if !initial_balance.is_zero() {
            account.deposit(initial_balance, Category::Deposit)?;
        }

        self.accounts.insert(account_id.clone(), account);
        // Inserted above, the lookup cannot miss
        self.accounts
            .get(&account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id.as_str()))
    }

    /// Look up an account by id
    pub fn get_account(&self, account_id: &AccountId) -> LedgerResult<&Account> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id.as_str()))
    }

    /// Add funds to an account
    pub fn deposit(
        &mut self,
        account_id: &AccountId,
        amount: Money,
        category: Category,
    ) -> LedgerResult<()> {
        self.get_account_mut(account_id)?.deposit(amount, category)
    }

    /// Remove funds from an account
    pub fn withdraw(
        &mut self,
        account_id: &AccountId,
        amount: Money,
        category: Category,
    ) -> LedgerResult<()> {
        self.get_account_mut(account_id)?.withdraw(amount, category)
    }

    /// Move funds between two accounts as a single logical unit
    ///
    /// Debits `from` and credits `to`, both with category `Transfer`. If
    /// either account is missing, the endpoints are the same, the amount is
    /// negative, or funds are insufficient, no mutation occurs. The
    /// sufficiency check lives in [`Account::withdraw`] alone; this method
    /// only pre-checks existence, so the two checks cannot diverge.
    pub fn transfer_funds(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Money,
    ) -> LedgerResult<()> {
        if from == to {
            return Err(LedgerError::InvalidInput(format!(
                "Cannot transfer from account {} to itself",
                from
            )));
        }

        // Verify both endpoints before touching either balance
        self.get_account(from)?;
        self.get_account(to)?;

        self.get_account_mut(from)?.withdraw(amount, Category::Transfer)?;
        // The debit above succeeded; `to` was verified, so this credit of a
        // non-negative amount cannot fail and the pair commits atomically.
        self.get_account_mut(to)?.deposit(amount, Category::Transfer)
    }

    /// Current balance of an account
    pub fn balance(&self, account_id: &AccountId) -> LedgerResult<Money> {
        Ok(self.get_account(account_id)?.balance())
    }

    /// Transaction history of an account in chronological order
    pub fn history(&self, account_id: &AccountId) -> LedgerResult<&[Transaction]> {
        Ok(self.get_account(account_id)?.history())
    }

    /// Iterate over all accounts, ordered by id
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    fn get_account_mut(&mut self, account_id: &AccountId) -> LedgerResult<&mut Account> {
        self.accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AccountId {
        AccountId::parse(s).unwrap()
    }

    fn ledger_with_account(balance: i64) -> (Ledger, AccountId) {
        let mut ledger = Ledger::new("Test Ledger");
        let account_id = id("1234567890");
        ledger
            .create_account(account_id.clone(), "Jane Doe", Money::zero())
            .unwrap();
        if balance > 0 {
            ledger
                .deposit(&account_id, Money::from_rupiah(balance), Category::Deposit)
                .unwrap();
        }
        (ledger, account_id)
    }

    #[test]
    fn test_create_and_deposit() {
        // Scenario 1: create, deposit 50,000, balance = 50,000.00
        let (mut ledger, account_id) = ledger_with_account(0);
        ledger
            .deposit(
                &account_id,
                Money::from_rupiah(50_000),
                Category::Deposit,
            )
            .unwrap();

        let account = ledger.get_account(&account_id).unwrap();
        assert_eq!(account.balance(), Money::from_rupiah(50_000));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw_with_category() {
        // Scenario 2: withdraw 20,000 for Supermarket
        let (mut ledger, account_id) = ledger_with_account(50_000);
        ledger
            .withdraw(
                &account_id,
                Money::from_rupiah(20_000),
                Category::Supermarket,
            )
            .unwrap();

        let account = ledger.get_account(&account_id).unwrap();
        assert_eq!(account.balance(), Money::from_rupiah(30_000));
        assert_eq!(account.history().len(), 2);
        let last = account.history().last().unwrap();
        assert_eq!(last.amount(), Money::from_rupiah(-20_000));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        // Scenario 3: withdrawal exceeding the balance changes nothing
        let (mut ledger, account_id) = ledger_with_account(30_000);
        let result = ledger.withdraw(
            &account_id,
            Money::from_rupiah(1_000_000),
            Category::Supermarket,
        );

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        let account = ledger.get_account(&account_id).unwrap();
        assert_eq!(account.balance(), Money::from_rupiah(30_000));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_transfer_funds() {
        // Scenario 4: both sides gain one Transfer entry of matching magnitude
        let (mut ledger, from) = ledger_with_account(30_000);
        let to = id("0987654321");
        ledger
            .create_account(to.clone(), "John Smith", Money::zero())
            .unwrap();

        ledger
            .transfer_funds(&from, &to, Money::from_rupiah(10_000))
            .unwrap();

        assert_eq!(ledger.balance(&from).unwrap(), Money::from_rupiah(20_000));
        assert_eq!(ledger.balance(&to).unwrap(), Money::from_rupiah(10_000));

        let debit = ledger.history(&from).unwrap().last().unwrap().clone();
        let credit = ledger.history(&to).unwrap().last().unwrap().clone();
        assert_eq!(debit.amount(), Money::from_rupiah(-10_000));
        assert_eq!(credit.amount(), Money::from_rupiah(10_000));
        assert_eq!(debit.category(), &Category::Transfer);
        assert_eq!(credit.category(), &Category::Transfer);
    }

    #[test]
    fn test_transfer_to_unknown_account() {
        // Scenario 5: failed transfer leaves the source untouched
        let (mut ledger, from) = ledger_with_account(30_000);
        let unknown = id("0000000000");

        let result = ledger.transfer_funds(&from, &unknown, Money::from_rupiah(10_000));
        assert!(matches!(result, Err(LedgerError::AccountNotFound { .. })));

        assert_eq!(ledger.balance(&from).unwrap(), Money::from_rupiah(30_000));
        assert_eq!(ledger.history(&from).unwrap().len(), 1);
    }

    #[test]
    fn test_transfer_from_unknown_account() {
        let (mut ledger, to) = ledger_with_account(0);
        let unknown = id("0000000000");

        let result = ledger.transfer_funds(&unknown, &to, Money::from_rupiah(10_000));
        assert!(matches!(result, Err(LedgerError::AccountNotFound { .. })));
        assert!(ledger.history(&to).unwrap().is_empty());
    }

    #[test]
    fn test_transfer_insufficient_funds_is_atomic() {
        let (mut ledger, from) = ledger_with_account(5_000);
        let to = id("0987654321");
        ledger
            .create_account(to.clone(), "John Smith", Money::zero())
            .unwrap();

        let result = ledger.transfer_funds(&from, &to, Money::from_rupiah(10_000));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));

        // Neither side changed
        assert_eq!(ledger.balance(&from).unwrap(), Money::from_rupiah(5_000));
        assert_eq!(ledger.balance(&to).unwrap(), Money::zero());
        assert_eq!(ledger.history(&from).unwrap().len(), 1);
        assert!(ledger.history(&to).unwrap().is_empty());
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        let (mut ledger, account_id) = ledger_with_account(30_000);
        let result = ledger.transfer_funds(&account_id, &account_id, Money::from_rupiah(1_000));
        assert!(matches!(result, Err(LedgerError::InvalidInput(_))));
        assert_eq!(ledger.history(&account_id).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let (mut ledger, account_id) = ledger_with_account(30_000);
        let result = ledger.create_account(account_id.clone(), "Someone Else", Money::zero());
        assert!(matches!(result, Err(LedgerError::AccountExists { .. })));

        // Existing account untouched
        let account = ledger.get_account(&account_id).unwrap();
        assert_eq!(account.holder_name(), "Jane Doe");
        assert_eq!(account.balance(), Money::from_rupiah(30_000));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_create_with_initial_balance() {
        let mut ledger = Ledger::new("Test Ledger");
        let account_id = id("1234567890");
        let account = ledger
            .create_account(account_id, "Jane Doe", Money::from_rupiah(25_000))
            .unwrap();

        // Opening balance shows up as one Deposit entry, keeping the
        // sum-of-history invariant from birth
        assert_eq!(account.balance(), Money::from_rupiah(25_000));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].category(), &Category::Deposit);
    }

    #[test]
    fn test_create_with_negative_initial_balance() {
        let mut ledger = Ledger::new("Test Ledger");
        let result =
            ledger.create_account(id("1234567890"), "Jane Doe", Money::from_rupiah(-1));
        assert!(matches!(result, Err(LedgerError::InvalidInput(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_create_with_bad_holder_name() {
        let mut ledger = Ledger::new("Test Ledger");
        let result = ledger.create_account(id("1234567890"), "", Money::zero());
        assert!(matches!(result, Err(LedgerError::InvalidInput(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_account_lookups() {
        let ledger = Ledger::new("Test Ledger");
        let unknown = id("0000000000");
        assert!(ledger.get_account(&unknown).is_err());
        assert!(ledger.balance(&unknown).is_err());
        assert!(ledger.history(&unknown).is_err());
    }

    #[test]
    fn test_accounts_ordered_by_id() {
        let mut ledger = Ledger::new("Test Ledger");
        ledger
            .create_account(id("9999999999"), "Last Holder", Money::zero())
            .unwrap();
        ledger
            .create_account(id("1111111111"), "First Holder", Money::zero())
            .unwrap();

        let ids: Vec<_> = ledger
            .accounts()
            .map(|a| a.account_id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["1111111111", "9999999999"]);
    }

    #[test]
    fn test_balance_equals_history_sum_after_mixed_operations() {
        let (mut ledger, a) = ledger_with_account(100_000);
        let b = id("0987654321");
        ledger
            .create_account(b.clone(), "John Smith", Money::zero())
            .unwrap();

        ledger
            .withdraw(&a, Money::from_rupiah(15_000), Category::TollRoad)
            .unwrap();
        ledger
            .transfer_funds(&a, &b, Money::from_rupiah(40_000))
            .unwrap();
        ledger
            .deposit(&b, Money::from_rupiah(5_000), Category::Deposit)
            .unwrap();
        let _ = ledger.withdraw(&b, Money::from_rupiah(999_999), Category::GasStation);

        for account in ledger.accounts() {
            let sum: Money = account.history().iter().map(|t| t.amount()).sum();
            assert_eq!(account.balance(), sum);
            assert!(!account.balance().is_negative());
        }
    }
}
