use crate::{
    common::{error::BankError, event::BankCommand},
    domain::ledger::Ledger,
    worker::handlers::{create, deposit, transfer, withdraw},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: BankCommand) -> Result<(), BankError> {
        match command {
            BankCommand::Create { owner } => {
                create::handle(ledger, &owner)?;
            }
            BankCommand::Deposit { id, amount } => {
                deposit::handle(ledger, id, amount)?;
            }
            BankCommand::Withdraw { id, amount } => {
                withdraw::handle(ledger, id, amount)?;
            }
            BankCommand::Transfer { from, to, amount } => {
                transfer::handle(ledger, from, to, amount)?;
            }
        }
        Ok(())
    }
}
