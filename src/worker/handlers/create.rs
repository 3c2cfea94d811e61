use crate::{common::error::BankError, domain::ledger::Ledger};

/// Opens a new zero-balance account and returns its id.
///
/// The owner name lands verbatim in the persisted header line, so anything
/// that would break the line format (`;`, line breaks) is rejected here.
pub fn handle(ledger: &mut Ledger, owner: &str) -> Result<u32, BankError> {
    let owner = owner.trim();
    if owner.is_empty() {
        return Err(BankError::InvalidArgument(
            "owner name must not be empty".to_string(),
        ));
    }
    if owner.contains(';') || owner.contains('\n') || owner.contains('\r') {
        return Err(BankError::InvalidArgument(
            "owner name must not contain ';' or line breaks".to_string(),
        ));
    }

    Ok(ledger.create_account(owner))
}
