use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::error::BankError;
use crate::domain::{account::Account, ledger::Ledger};

/// Writes the ledger in the persisted block format, accounts in insertion
/// order, LF line endings. Two saves of an unchanged ledger produce
/// identical bytes.
///
/// # Examples
///
/// ```
/// use bank_ledger::domain::ledger::Ledger;
/// use bank_ledger::io::writer::write_ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.create_account("Alice");
///
/// let mut out = Vec::new();
/// write_ledger(&mut out, &ledger).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "1;Alice;0.00\nEND\n");
/// ```
pub fn write_ledger<W: Write>(mut writer: W, ledger: &Ledger) -> std::io::Result<()> {
    for account in ledger.accounts() {
        write_account(&mut writer, account)?;
    }
    writer.flush()
}

fn write_account<W: Write>(writer: &mut W, account: &Account) -> std::io::Result<()> {
    writeln!(
        writer,
        "{};{};{}",
        account.id(),
        account.owner(),
        account.balance()
    )?;
    for tx in account.history() {
        writeln!(writer, "T:{}", tx.encode())?;
    }
    writeln!(writer, "END")
}

/// Saves the ledger to `path` by writing a temporary sibling file and
/// renaming it into place, so an interrupted save never truncates the
/// previous data.
pub fn save_to_path(path: &Path, ledger: &Ledger) -> Result<(), BankError> {
    let tmp = tmp_path(path);
    let mut file = fs::File::create(&tmp)?;
    write_ledger(&mut file, ledger)?;
    drop(file);
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), accounts = ledger.len(), "ledger saved");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use crate::domain::transaction::{Transaction, TxKind};

    fn tx(ts: &str, kind: TxKind, cents: i64) -> Transaction {
        Transaction::new(ts.to_string(), kind, Money::new(cents))
    }

    fn sample_ledger() -> Ledger {
        // Restored accounts carry fixed timestamps, which keeps the expected
        // bytes deterministic.
        let mut ledger = Ledger::new();
        ledger
            .insert_restored(Account::restore(
                1,
                "Alice".to_string(),
                Money::new(3_000),
                vec![
                    tx("2026-01-02 10:30:00", TxKind::Deposit, 5_000),
                    tx("2026-01-02 10:31:00", TxKind::TransferOut, 2_000),
                ],
            ))
            .unwrap();
        ledger
            .insert_restored(Account::restore(
                2,
                "Bob".to_string(),
                Money::new(2_000),
                vec![tx("2026-01-02 10:31:00", TxKind::TransferIn, 2_000)],
            ))
            .unwrap();
        ledger
    }

    fn write_to_string(ledger: &Ledger) -> String {
        let mut out = Vec::new();
        write_ledger(&mut out, ledger).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_exact_block_format() {
        let expected = "1;Alice;30.00\n\
                        T:2026-01-02 10:30:00|DEPOSIT|50.00\n\
                        T:2026-01-02 10:31:00|TRANSFER_OUT|20.00\n\
                        END\n\
                        2;Bob;20.00\n\
                        T:2026-01-02 10:31:00|TRANSFER_IN|20.00\n\
                        END\n";

        assert_eq!(write_to_string(&sample_ledger()), expected);
    }

    #[test]
    fn empty_ledger_writes_empty_file() {
        assert_eq!(write_to_string(&Ledger::new()), "");
    }

    #[test]
    fn repeated_saves_are_byte_identical() {
        let ledger = sample_ledger();
        assert_eq!(write_to_string(&ledger), write_to_string(&ledger));
    }

    #[test]
    fn save_to_path_writes_file_and_removes_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank_data.txt");

        save_to_path(&path, &sample_ledger()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("1;Alice;30.00\n"));
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn save_to_path_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank_data.txt");

        save_to_path(&path, &sample_ledger()).unwrap();
        let mut ledger = Ledger::new();
        ledger.create_account("Carol");
        save_to_path(&path, &ledger).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1;Carol;0.00\nEND\n");
    }

    #[test]
    fn failed_save_leaves_existing_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank_data.txt");
        save_to_path(&path, &sample_ledger()).unwrap();
        let original = fs::read_to_string(&path).unwrap();

        // A directory squatting on the temp name forces File::create to fail.
        fs::create_dir_all(tmp_path(&path)).unwrap();
        let mut changed = Ledger::new();
        changed.create_account("Mallory");
        assert!(save_to_path(&path, &changed).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
