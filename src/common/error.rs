use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum BankError {
    #[error("account {0} not found")]
    NotFound(u32),
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
