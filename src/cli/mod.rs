//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::kdf::Argon2Params;
use crate::errors::{PassVaultError, Result};

/// Minimum password length to prevent trivially weak master passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// PassVault CLI: password-protected credential store.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Password-protected credential store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: from .passvault.toml, else passvault.json)
    #[arg(short, long, global = true)]
    pub file: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new empty vault
    Init,

    /// Decrypt and display all entries
    Show {
        /// Print the decrypted document as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show stored passwords instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Add a new entry
    Add {
        /// Entry name (e.g. github)
        name: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update fields on the first entry with a matching name
    Update {
        /// Entry name
        name: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete all entries with a matching name
    Delete {
        /// Entry name
        name: String,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// The optional credential fields shared by `add` and `update`.
#[derive(clap::Args)]
pub struct FieldArgs {
    /// Username
    #[arg(long)]
    pub username: Option<String>,

    /// Account identifier
    #[arg(long)]
    pub account: Option<String>,

    /// Password for the entry
    #[arg(long)]
    pub password: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,
}

impl FieldArgs {
    /// Collect the fields that were actually provided on the command line.
    pub fn provided(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        for (key, value) in [
            ("username", &self.username),
            ("account", &self.account),
            ("password", &self.password),
            ("website", &self.website),
            ("phone", &self.phone),
            ("email", &self.email),
        ] {
            if let Some(v) = value {
                fields.push((key.to_string(), v.clone()));
            }
        }
        fields
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (CI/scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used during `init`).
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.  Enforces a
/// minimum password length.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose vault password")
            .with_confirmation(
                "Confirm vault password",
                "Passwords do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the vault file path and Argon2 parameters from the CLI
/// arguments and `.passvault.toml` in the working directory.
pub fn vault_context(cli: &Cli) -> Result<(PathBuf, Argon2Params)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = settings.vault_path(&cwd, cli.file.as_deref());
    Ok((path, settings.argon2_params()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_fields() -> FieldArgs {
        FieldArgs {
            username: None,
            account: None,
            password: None,
            website: None,
            phone: None,
            email: None,
        }
    }

    #[test]
    fn provided_skips_missing_fields() {
        let fields = FieldArgs {
            username: Some("alice".to_string()),
            email: Some("alice@example.com".to_string()),
            ..empty_fields()
        };

        let provided = fields.provided();
        assert_eq!(
            provided,
            vec![
                ("username".to_string(), "alice".to_string()),
                ("email".to_string(), "alice@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn provided_is_empty_when_nothing_given() {
        assert!(empty_fields().provided().is_empty());
    }
}
