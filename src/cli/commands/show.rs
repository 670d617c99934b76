//! `passvault show` — decrypt and display vault entries.

use crate::cli::output;
use crate::cli::{prompt_password, vault_context, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault;

/// Execute the `show` command.
pub fn execute(cli: &Cli, json: bool, reveal: bool) -> Result<()> {
    let (path, params) = vault_context(cli)?;

    let password = prompt_password()?;
    let contents = vault::load_entries(&path, &password, &params)?;

    if json {
        let text = serde_json::to_string_pretty(&contents)
            .map_err(|e| PassVaultError::SerializationError(format!("entries: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    output::info(&format!(
        "{} — {} entry(ies)",
        path.display(),
        contents.len()
    ));

    output::print_entries_table(&contents.entries, reveal);

    Ok(())
}
