use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use crate::{
    common::{error::BankError, event::BankCommand, money::Money},
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::Processor,
};

/// Default data file, resolved against the working directory.
pub const DATA_FILE: &str = "bank_data.txt";

/// Loads the ledger, runs the interactive menu over stdin/stdout and saves
/// on the way out. The single optional argument overrides the data file
/// path.
///
/// A malformed data file aborts before the session starts, and nothing is
/// ever written back in that case, so a damaged file survives untouched for
/// inspection.
pub fn run<I, S>(args: I) -> Result<(), BankError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let path = Path::new(args.get(1).map(String::as_str).unwrap_or(DATA_FILE));

    let mut ledger = reader::load_from_path(path)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock(), &mut ledger)?;

    if let Err(err) = writer::save_to_path(path, &ledger) {
        tracing::error!(path = %path.display(), error = %err, "failed to save ledger");
        return Err(err);
    }
    Ok(())
}

/// Drives one operator session over any line-based input/output pair.
/// End of input behaves like the exit choice: the loop ends and the caller
/// saves.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    ledger: &mut Ledger,
) -> std::io::Result<()> {
    let mut processor = Processor::new();

    loop {
        write_menu(&mut output)?;
        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(owner) = prompt(&mut input, &mut output, "Owner name:")? else {
                    break;
                };
                let result = processor.process(ledger, BankCommand::Create { owner });
                report(&mut output, result, "Account created successfully.")?;
            }
            "2" => {
                let Some((id_raw, amount_raw)) =
                    prompt_id_and_amount(&mut input, &mut output, "Account ID:")?
                else {
                    break;
                };
                let result = parse_id(&id_raw).and_then(|id| {
                    let amount = parse_amount(&amount_raw)?;
                    processor.process(ledger, BankCommand::Deposit { id, amount })
                });
                report(&mut output, result, "Deposit successful.")?;
            }
            "3" => {
                let Some((id_raw, amount_raw)) =
                    prompt_id_and_amount(&mut input, &mut output, "Account ID:")?
                else {
                    break;
                };
                let result = parse_id(&id_raw).and_then(|id| {
                    let amount = parse_amount(&amount_raw)?;
                    processor.process(ledger, BankCommand::Withdraw { id, amount })
                });
                report(&mut output, result, "Withdrawal successful.")?;
            }
            "4" => {
                let Some(from_raw) = prompt(&mut input, &mut output, "From ID:")? else {
                    break;
                };
                let Some((to_raw, amount_raw)) =
                    prompt_id_and_amount(&mut input, &mut output, "To ID:")?
                else {
                    break;
                };
                let result = parse_id(&from_raw).and_then(|from| {
                    let to = parse_id(&to_raw)?;
                    let amount = parse_amount(&amount_raw)?;
                    processor.process(ledger, BankCommand::Transfer { from, to, amount })
                });
                report(&mut output, result, "Transfer completed.")?;
            }
            "5" => {
                writeln!(output, "\n--- Accounts ---")?;
                for summary in ledger.summaries() {
                    writeln!(
                        output,
                        "ID: {} | Owner: {} | Balance: ${}",
                        summary.id, summary.owner, summary.balance
                    )?;
                }
            }
            "6" => {
                let Some(id_raw) = prompt(&mut input, &mut output, "Account ID:")? else {
                    break;
                };
                match parse_id(&id_raw).and_then(|id| ledger.history(id)) {
                    Ok(history) => {
                        writeln!(output, "\n--- Transaction History ---")?;
                        for tx in history {
                            writeln!(
                                output,
                                "{} | {:<15} | ${}",
                                tx.timestamp(),
                                tx.kind().as_str(),
                                tx.amount()
                            )?;
                        }
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "0" => {
                writeln!(output, "Goodbye.")?;
                break;
            }
            "" => {}
            _ => writeln!(output, "Invalid choice.")?,
        }
    }

    Ok(())
}

fn write_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(
        output,
        "\n=== Console Banking System ===\n\
         1. Create Account\n\
         2. Deposit\n\
         3. Withdraw\n\
         4. Transfer\n\
         5. List Accounts\n\
         6. Show History\n\
         0. Exit\n\
         Select: "
    )?;
    output.flush()
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{label} ")?;
    output.flush()?;
    read_line(input)
}

/// The id/amount prompt pair shared by deposit and withdraw; the first label
/// varies, the amount prompt does not.
fn prompt_id_and_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    id_label: &str,
) -> std::io::Result<Option<(String, String)>> {
    let Some(id_raw) = prompt(input, output, id_label)? else {
        return Ok(None);
    };
    let Some(amount_raw) = prompt(input, output, "Amount:")? else {
        return Ok(None);
    };
    Ok(Some((id_raw, amount_raw)))
}

fn parse_id(raw: &str) -> Result<u32, BankError> {
    raw.trim()
        .parse()
        .map_err(|_| BankError::InvalidArgument(format!("invalid account id {:?}", raw.trim())))
}

fn parse_amount(raw: &str) -> Result<Money, BankError> {
    Money::from_str(raw)
        .map_err(|_| BankError::InvalidArgument(format!("invalid amount {:?}", raw.trim())))
}

fn report<W: Write>(
    output: &mut W,
    result: Result<(), BankError>,
    success: &str,
) -> std::io::Result<()> {
    match result {
        Ok(()) => writeln!(output, "{success}"),
        Err(err) => writeln!(output, "{err}"),
    }
}
