//! `passvault update` — merge fields into an existing entry.

use crate::cli::output;
use crate::cli::{prompt_password, vault_context, Cli, FieldArgs};
use crate::errors::{PassVaultError, Result};
use crate::vault;

/// Execute the `update` command.
///
/// Only the first entry with a matching name is touched.
pub fn execute(cli: &Cli, name: &str, fields: &FieldArgs) -> Result<()> {
    let (path, params) = vault_context(cli)?;

    let provided = fields.provided();
    if provided.is_empty() {
        output::warning("No fields given — nothing to update.");
        return Ok(());
    }

    let password = prompt_password()?;
    let mut contents = vault::load_entries(&path, &password, &params)?;

    if !contents.update(name, provided) {
        return Err(PassVaultError::EntryNotFound(name.to_string()));
    }

    vault::save_entries(&path, &password, &contents, &params)?;

    output::success(&format!("Updated entry '{name}'"));

    Ok(())
}
