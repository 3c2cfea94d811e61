use crate::common::error::BankError;
use crate::domain::account::{Account, AccountSummary};
use crate::domain::transaction::Transaction;

/// The collection of all accounts plus the id allocator.
///
/// Accounts are kept in insertion order: listings and the persisted file both
/// walk the collection front to back, so a ledger saved twice without
/// mutations produces identical bytes. Lookup is linear, which is fine at
/// console scale.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    next_id: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates the next id and inserts a fresh zero-balance account.
    /// Owner validation is the create handler's job.
    pub fn create_account(&mut self, owner: &str) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.accounts.push(Account::new(id, owner));
        id
    }

    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id() == id)
    }

    pub fn account_mut(&mut self, id: u32) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id() == id)
    }

    /// Accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// The id the next created account will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Account summaries in insertion order.
    pub fn summaries(&self) -> impl Iterator<Item = AccountSummary> + '_ {
        self.accounts.iter().map(Account::summary)
    }

    /// One account's transaction history in append order.
    pub fn history(&self, id: u32) -> Result<&[Transaction], BankError> {
        self.account(id)
            .map(Account::history)
            .ok_or(BankError::NotFound(id))
    }

    /// Re-inserts an account restored from the persisted file, keeping file
    /// order and bumping the allocator past its id. Duplicate ids are
    /// rejected; the loader turns that into a malformed-record error.
    pub(crate) fn insert_restored(&mut self, account: Account) -> Result<(), String> {
        if self.account(account.id()).is_some() {
            return Err(format!("duplicate account id {}", account.id()));
        }
        self.next_id = self.next_id.max(account.id() + 1);
        self.accounts.push(account);
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;

    #[test]
    fn create_allocates_monotonically_increasing_ids_from_one() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.create_account("Alice"), 1);
        assert_eq!(ledger.create_account("Bob"), 2);
        assert_eq!(ledger.create_account("Carol"), 3);
        assert_eq!(ledger.next_id(), 4);
    }

    #[test]
    fn lookup_finds_existing_and_misses_unknown() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice");

        assert_eq!(ledger.account(id).unwrap().owner(), "Alice");
        assert!(ledger.account(99).is_none());
        assert!(ledger.account_mut(99).is_none());
    }

    #[test]
    fn summaries_follow_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice");
        ledger.create_account("Bob");
        ledger.account_mut(1).unwrap().deposit(Money::new(500));

        let summaries: Vec<_> = ledger.summaries().collect();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, 1);
        assert_eq!(summaries[0].balance, Money::new(500));
        assert_eq!(summaries[1].owner, "Bob");
    }

    #[test]
    fn history_is_not_found_for_unknown_id() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice");
        ledger.account_mut(id).unwrap().deposit(Money::new(100));

        assert_eq!(ledger.history(id).unwrap().len(), 1);
        assert!(ledger.history(99).is_err());
    }

    #[test]
    fn accounts_iterate_in_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice");
        ledger.create_account("Bob");

        let owners: Vec<&str> = ledger.accounts().iter().map(|a| a.owner()).collect();
        assert_eq!(owners, ["Alice", "Bob"]);
    }

    #[test]
    fn insert_restored_bumps_next_id_past_highest() {
        let mut ledger = Ledger::new();
        ledger
            .insert_restored(Account::restore(
                5,
                "Eve".to_string(),
                Money::zero(),
                Vec::new(),
            ))
            .unwrap();
        ledger
            .insert_restored(Account::restore(
                2,
                "Bob".to_string(),
                Money::zero(),
                Vec::new(),
            ))
            .unwrap();

        assert_eq!(ledger.next_id(), 6);
        assert_eq!(ledger.create_account("Frank"), 6);
    }

    #[test]
    fn insert_restored_rejects_duplicate_ids() {
        let mut ledger = Ledger::new();
        ledger
            .insert_restored(Account::restore(
                1,
                "Alice".to_string(),
                Money::zero(),
                Vec::new(),
            ))
            .unwrap();

        let err = ledger
            .insert_restored(Account::restore(
                1,
                "Mallory".to_string(),
                Money::zero(),
                Vec::new(),
            ))
            .unwrap_err();
        assert_eq!(err, "duplicate account id 1");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn ids_stay_unique_after_restore_then_create() {
        let mut ledger = Ledger::new();
        ledger
            .insert_restored(Account::restore(
                3,
                "Carol".to_string(),
                Money::zero(),
                Vec::new(),
            ))
            .unwrap();

        let new_id = ledger.create_account("Dave");
        assert_eq!(new_id, 4);

        let mut ids: Vec<u32> = ledger.accounts().iter().map(|a| a.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), ledger.len());
    }
}
