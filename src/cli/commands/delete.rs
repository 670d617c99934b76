//! `passvault delete` — remove entries from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_password, vault_context, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault;

/// Execute the `delete` command.
///
/// Removes every entry with a matching name.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let (path, params) = vault_context(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let password = prompt_password()?;
    let mut contents = vault::load_entries(&path, &password, &params)?;

    let removed = contents.remove(name);
    if removed == 0 {
        return Err(PassVaultError::EntryNotFound(name.to_string()));
    }

    vault::save_entries(&path, &password, &contents, &params)?;

    output::success(&format!("Deleted {removed} entry(ies) named '{name}'"));

    Ok(())
}
