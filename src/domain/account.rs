use crate::common::{clock, error::BankError, money::Money};
use crate::domain::transaction::{Transaction, TxKind};

/// A single bank account: identity, owner, running balance and the ordered
/// history of every balance-changing event.
#[derive(Debug, Clone)]
pub struct Account {
    pub(crate) id: u32,
    pub(crate) owner: String,
    pub(crate) balance: Money,
    pub(crate) history: Vec<Transaction>,
}

/// The `(id, owner, balance)` view used by account listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: u32,
    pub owner: String,
    pub balance: Money,
}

impl Account {
    pub fn new(id: u32, owner: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
            balance: Money::zero(),
            history: Vec::new(),
        }
    }

    /// Rebuilds an account from persisted parts. The stored balance is taken
    /// as-is; the loader is responsible for warning when it disagrees with
    /// the history.
    pub(crate) fn restore(
        id: u32,
        owner: String,
        balance: Money,
        history: Vec<Transaction>,
    ) -> Self {
        Self {
            id,
            owner,
            balance,
            history,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// History in insertion order, which is also chronological order.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            owner: self.owner.clone(),
            balance: self.balance,
        }
    }

    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
        self.record(TxKind::Deposit, amount);
    }

    /// Debits `amount` if covered by the balance. A withdrawal of exactly the
    /// balance succeeds; anything above it leaves the account untouched.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), BankError> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        self.record(TxKind::Withdraw, amount);
        Ok(())
    }

    /// Outgoing transfer leg. The caller has already verified the funds.
    pub fn transfer_out(&mut self, amount: Money) {
        self.balance -= amount;
        self.record(TxKind::TransferOut, amount);
    }

    /// Incoming transfer leg.
    pub fn transfer_in(&mut self, amount: Money) {
        self.balance += amount;
        self.record(TxKind::TransferIn, amount);
    }

    /// Signed reduction of the history, in cents. Equals the balance for any
    /// account this crate built itself.
    pub fn history_total_cents(&self) -> i64 {
        self.history.iter().map(Transaction::signed_cents).sum()
    }

    fn record(&mut self, kind: TxKind, amount: Money) {
        self.history
            .push(Transaction::new(clock::timestamp(), kind, amount));
    }
}
