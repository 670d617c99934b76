//! The vault engine: open, save, and the path-level operations used by
//! CLI commands.
//!
//! The engine is deliberately stateless.  Every call takes the master
//! password, derives the key, uses it, and wipes it — nothing caches a
//! session key between calls.  Every save draws a fresh salt and a
//! fresh nonce and re-encrypts the full contents; there is no
//! incremental update path.

use std::path::Path;

use zeroize::Zeroize;

use crate::crypto::encryption::{decrypt, encrypt, generate_nonce};
use crate::crypto::kdf::{derive_key_with_params, generate_salt, Argon2Params};
use crate::errors::{PassVaultError, Result};

use super::entry::VaultContents;
use super::format::{self, VaultEnvelope, KDF_ARGON2ID};

// ---------------------------------------------------------------------------
// Envelope-level operations
// ---------------------------------------------------------------------------

/// Build an envelope for an empty vault under `password`.
pub fn create(password: &str, params: &Argon2Params) -> Result<VaultEnvelope> {
    save(password, &VaultContents::new(), params)
}

/// Decrypt an envelope and deserialize the entries inside it.
///
/// Fails with `DecryptionFailed` on any verification failure — a wrong
/// password and a corrupted file are indistinguishable here — and with
/// `InvalidVaultFormat` if the decrypted bytes are not a valid entries
/// document.
pub fn open(
    password: &str,
    envelope: &VaultEnvelope,
    params: &Argon2Params,
) -> Result<VaultContents> {
    if envelope.kdf != KDF_ARGON2ID {
        return Err(PassVaultError::InvalidVaultFormat(format!(
            "unsupported kdf '{}', expected '{KDF_ARGON2ID}'",
            envelope.kdf
        )));
    }

    let mut key = derive_key_with_params(password.as_bytes(), &envelope.salt, params)?;
    let decrypted = decrypt(&key, &envelope.nonce, &envelope.ciphertext);
    key.zeroize();

    let mut plaintext = decrypted?;
    let contents = format::deserialize_entries(&plaintext);
    plaintext.zeroize();

    contents
}

/// Serialize and encrypt `contents` under a brand-new salt and nonce.
///
/// Re-encryption is always full.  The previous envelope's keying
/// material is never reused: both salt and nonce are drawn fresh from
/// the OS CSPRNG on every call, and the key is re-derived from them.
pub fn save(
    password: &str,
    contents: &VaultContents,
    params: &Argon2Params,
) -> Result<VaultEnvelope> {
    let salt = generate_salt()?;
    let nonce = generate_nonce();

    let mut key = derive_key_with_params(password.as_bytes(), &salt, params)?;
    let mut plaintext = format::serialize_entries(contents)?;
    let encrypted = encrypt(&key, &nonce, &plaintext);
    key.zeroize();
    plaintext.zeroize();

    Ok(VaultEnvelope {
        kdf: KDF_ARGON2ID.to_string(),
        salt,
        nonce,
        ciphertext: encrypted?,
    })
}

// ---------------------------------------------------------------------------
// Path-level operations
// ---------------------------------------------------------------------------

/// Create and persist an empty vault at `path`.
///
/// Refuses to overwrite an existing file.
pub fn init_vault(path: &Path, password: &str, params: &Argon2Params) -> Result<()> {
    if path.exists() {
        return Err(PassVaultError::VaultAlreadyExists(path.to_path_buf()));
    }

    let envelope = create(password, params)?;
    format::write_vault(path, &envelope)
}

/// Load and decrypt the entries stored at `path`.
pub fn load_entries(path: &Path, password: &str, params: &Argon2Params) -> Result<VaultContents> {
    let envelope = format::read_vault(path)?;
    open(password, &envelope, params)
}

/// Re-encrypt `contents` under fresh keying material and atomically
/// replace the file at `path`.
pub fn save_entries(
    path: &Path,
    password: &str,
    contents: &VaultContents,
    params: &Argon2Params,
) -> Result<()> {
    let envelope = save(password, contents, params)?;
    format::write_vault(path, &envelope)
}
