use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::common::{error::BankError, money::Money};
use crate::domain::{account::Account, ledger::Ledger, transaction::Transaction};

/// Reads a persisted ledger from a buffered reader.
///
/// The file is a sequence of account blocks: a `id;owner;balance` header,
/// zero or more `T:`-prefixed transaction lines, and an `END` terminator.
/// Blank lines between blocks are skipped; unrecognized lines inside a block
/// are ignored; end of input closes the final block even without `END`.
/// Any line that cannot be parsed aborts the load with its line number.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_ledger;
///
/// let data = "1;Alice;30.00\n\
/// T:2026-01-02 10:30:00|DEPOSIT|50.00\n\
/// T:2026-01-02 10:31:00|TRANSFER_OUT|20.00\n\
/// END\n";
/// let ledger = read_ledger(data.as_bytes()).unwrap();
///
/// assert_eq!(ledger.accounts()[0].owner(), "Alice");
/// assert_eq!(ledger.accounts()[0].history().len(), 2);
/// assert_eq!(ledger.next_id(), 2);
/// ```
pub fn read_ledger<R: BufRead>(reader: R) -> Result<Ledger, BankError> {
    let mut ledger = Ledger::new();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    loop {
        // Next non-blank line is an account header; EOF means we are done.
        let (header_no, header) = loop {
            match lines.next() {
                None => {
                    warn_on_balance_mismatches(&ledger);
                    tracing::debug!(accounts = ledger.len(), "ledger loaded");
                    return Ok(ledger);
                }
                Some(line) => {
                    line_no += 1;
                    let line = line?;
                    if !line.trim().is_empty() {
                        break (line_no, line);
                    }
                }
            }
        };

        let (id, owner, balance) = parse_header(header_no, &header)?;

        let mut history = Vec::new();
        loop {
            match lines.next() {
                // EOF closes the final block, as the legacy loader did.
                None => break,
                Some(line) => {
                    line_no += 1;
                    let line = line?;
                    if line == "END" {
                        break;
                    }
                    if let Some(data) = line.strip_prefix("T:") {
                        let tx = Transaction::decode(data).map_err(|reason| {
                            BankError::MalformedRecord {
                                line: line_no,
                                reason,
                            }
                        })?;
                        history.push(tx);
                    }
                    // anything else inside a block is ignored
                }
            }
        }

        ledger
            .insert_restored(Account::restore(id, owner, balance, history))
            .map_err(|reason| BankError::MalformedRecord {
                line: header_no,
                reason,
            })?;
    }
}

/// Loads the ledger from `path`. A file that does not exist or cannot be
/// opened yields an empty ledger, not an error; the operator may simply be
/// starting fresh.
pub fn load_from_path(path: &Path) -> Result<Ledger, BankError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!(
                path = %path.display(),
                error = %err,
                "data file not readable, starting with an empty ledger"
            );
            return Ok(Ledger::new());
        }
    };
    read_ledger(BufReader::new(file))
}

fn parse_header(line_no: usize, line: &str) -> Result<(u32, String, Money), BankError> {
    let malformed = |reason: String| BankError::MalformedRecord {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "account header must have 3 ';'-separated fields, got {}",
            fields.len()
        )));
    }

    let id: u32 = fields[0]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad account id {:?}", fields[0])))?;
    if id == 0 {
        return Err(malformed("account id must be positive".to_string()));
    }

    let balance = Money::from_str(fields[2])
        .map_err(|e| malformed(format!("bad balance {:?}: {e}", fields[2])))?;
    if balance < Money::zero() {
        return Err(malformed(format!("negative balance {balance}")));
    }

    Ok((id, fields[1].to_string(), balance))
}

/// The stored header balance is authoritative, but a disagreement with the
/// transaction history means the file was edited or produced by a buggy
/// writer; surface it instead of failing the load.
fn warn_on_balance_mismatches(ledger: &Ledger) {
    for account in ledger.accounts() {
        let from_history = account.history_total_cents();
        if account.balance().as_cents() != from_history {
            tracing::warn!(
                account = account.id(),
                balance = %account.balance(),
                history_total = %Money::new(from_history),
                "stored balance disagrees with transaction history"
            );
        }
    }
}
