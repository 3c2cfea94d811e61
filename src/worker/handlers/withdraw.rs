use crate::{
    common::{error::BankError, money::Money},
    domain::ledger::Ledger,
};

/// Debits `amount` from the account; fails without mutation when the balance
/// does not cover it.
pub fn handle(ledger: &mut Ledger, id: u32, amount: Money) -> Result<(), BankError> {
    if !amount.is_positive() {
        return Err(BankError::InvalidArgument(format!(
            "withdrawal amount must be positive, got {amount}"
        )));
    }

    let account = ledger.account_mut(id).ok_or(BankError::NotFound(id))?;
    account.withdraw(amount)
}
