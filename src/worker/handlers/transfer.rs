use crate::{
    common::{error::BankError, money::Money},
    domain::ledger::Ledger,
};

/// Moves `amount` between two distinct accounts as a (TRANSFER_OUT,
/// TRANSFER_IN) pair.
///
/// Every check runs before either account is touched: both ends must exist
/// and the source balance must cover the amount. Once the legs start they
/// cannot fail, so the transfer is all-or-nothing.
pub fn handle(ledger: &mut Ledger, from: u32, to: u32, amount: Money) -> Result<(), BankError> {
    if !amount.is_positive() {
        return Err(BankError::InvalidArgument(format!(
            "transfer amount must be positive, got {amount}"
        )));
    }
    if from == to {
        return Err(BankError::InvalidArgument(format!(
            "cannot transfer from account {from} to itself"
        )));
    }

    let balance = ledger
        .account(from)
        .ok_or(BankError::NotFound(from))?
        .balance();
    ledger.account(to).ok_or(BankError::NotFound(to))?;
    if balance < amount {
        return Err(BankError::InsufficientFunds {
            balance,
            requested: amount,
        });
    }

    ledger
        .account_mut(from)
        .ok_or(BankError::NotFound(from))?
        .transfer_out(amount);
    ledger
        .account_mut(to)
        .ok_or(BankError::NotFound(to))?
        .transfer_in(amount);
    Ok(())
}
