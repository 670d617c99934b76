//! `passvault init` — create a new empty vault file.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_password, vault_context, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (path, params) = vault_context(cli)?;

    if path.exists() {
        output::tip("Use `passvault add` to add entries to the existing vault.");
        return Err(PassVaultError::VaultAlreadyExists(path));
    }

    // Create the parent directory if the vault file lives in one.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // Prompt for a new password (with confirmation) and persist an
    // empty vault under it.
    let password = prompt_new_password()?;
    vault::init_vault(&path, &password, &params)?;

    output::success(&format!("Vault created at {}", path.display()));
    output::tip("Run `passvault add <NAME>` to add an entry.");
    output::tip("Run `passvault show` to list entries.");

    Ok(())
}
