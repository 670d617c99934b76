//! `passvault add` — append a new entry to the vault.

use crate::cli::output;
use crate::cli::{prompt_password, vault_context, Cli, FieldArgs};
use crate::errors::Result;
use crate::vault::{self, Entry};

/// Execute the `add` command.
pub fn execute(cli: &Cli, name: &str, fields: &FieldArgs) -> Result<()> {
    let (path, params) = vault_context(cli)?;

    let password = prompt_password()?;
    let mut contents = vault::load_entries(&path, &password, &params)?;

    let mut entry = Entry::new(name);
    for (key, value) in fields.provided() {
        entry.fields.insert(key, value);
    }
    contents.add(entry);

    vault::save_entries(&path, &password, &contents, &params)?;

    output::success(&format!(
        "Added entry '{name}' ({} total)",
        contents.len()
    ));

    Ok(())
}
