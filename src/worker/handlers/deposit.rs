use crate::{
    common::{error::BankError, money::Money},
    domain::ledger::Ledger,
};

/// Credits `amount` to the account.
pub fn handle(ledger: &mut Ledger, id: u32, amount: Money) -> Result<(), BankError> {
    if !amount.is_positive() {
        return Err(BankError::InvalidArgument(format!(
            "deposit amount must be positive, got {amount}"
        )));
    }

    let account = ledger.account_mut(id).ok_or(BankError::NotFound(id))?;
    account.deposit(amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::handle;
    use crate::{
        common::{error::BankError, money::Money},
        domain::{ledger::Ledger, transaction::TxKind},
    };

    #[test]
    fn deposit_applies_credit_and_records_history() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice");

        handle(&mut ledger, id, Money::from_str("1.25").unwrap()).unwrap();

        let acc = ledger.account(id).expect("account exists");
        assert_eq!(acc.balance(), Money::from_str("1.25").unwrap());
        assert_eq!(acc.history().len(), 1);
        assert_eq!(acc.history()[0].kind(), TxKind::Deposit);
    }

    #[test]
    fn deposit_to_unknown_account_is_not_found() {
        let mut ledger = Ledger::new();

        let err = handle(&mut ledger, 99, Money::new(100)).unwrap_err();

        assert!(matches!(err, BankError::NotFound(99)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice");

        assert!(matches!(
            handle(&mut ledger, id, Money::zero()),
            Err(BankError::InvalidArgument(_))
        ));
        assert!(matches!(
            handle(&mut ledger, id, Money::new(-100)),
            Err(BankError::InvalidArgument(_))
        ));

        let acc = ledger.account(id).unwrap();
        assert_eq!(acc.balance(), Money::zero());
        assert!(acc.history().is_empty());
    }
}
