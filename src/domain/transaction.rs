use std::fmt;
use std::str::FromStr;

use crate::common::money::Money;

/// One balance-changing event in an account's history. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    timestamp: String,
    kind: TxKind,
    amount: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "DEPOSIT",
            TxKind::Withdraw => "WITHDRAW",
            TxKind::TransferOut => "TRANSFER_OUT",
            TxKind::TransferIn => "TRANSFER_IN",
        }
    }

    /// Sign of this kind's contribution to the balance: credits +1, debits -1.
    pub fn sign(&self) -> i64 {
        match self {
            TxKind::Deposit | TxKind::TransferIn => 1,
            TxKind::Withdraw | TxKind::TransferOut => -1,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(TxKind::Deposit),
            "WITHDRAW" => Ok(TxKind::Withdraw),
            "TRANSFER_OUT" => Ok(TxKind::TransferOut),
            "TRANSFER_IN" => Ok(TxKind::TransferIn),
            other => Err(format!("unknown transaction kind: {other}")),
        }
    }
}

impl Transaction {
    pub fn new(timestamp: String, kind: TxKind, amount: Money) -> Self {
        Self {
            timestamp,
            kind,
            amount,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// This transaction's contribution to the owning account's balance, in cents.
    pub fn signed_cents(&self) -> i64 {
        self.kind.sign() * self.amount.as_cents()
    }

    /// Renders the persisted line form `timestamp|KIND|amount`, amount with
    /// two decimals.
    pub fn encode(&self) -> String {
        format!("{}|{}|{}", self.timestamp, self.kind, self.amount)
    }

    /// Parses the persisted line form. Extra `|` fields beyond the third are
    /// ignored, as the first implementation did; fewer than three fields, an
    /// unknown kind or an unparseable amount are errors.
    pub fn decode(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < 3 {
            return Err(format!(
                "expected timestamp|kind|amount, got {} field(s)",
                fields.len()
            ));
        }
        let kind = TxKind::from_str(fields[1])?;
        let amount = Money::from_str(fields[2])
            .map_err(|e| format!("bad amount {:?}: {e}", fields[2]))?;

        Ok(Self {
            timestamp: fields[0].to_string(),
            kind,
            amount,
        })
    }
}
