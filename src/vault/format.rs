//! On-disk vault envelope format and atomic persistence.
//!
//! A vault file is a single JSON document:
//!
//! ```text
//! {"kdf":"argon2id","salt":"<base64>","nonce":"<base64>","ciphertext":"<base64>"}
//! ```
//!
//! - **kdf**: tag naming the key-derivation scheme used for this file.
//! - **salt**: 16 random bytes, regenerated on every save.
//! - **nonce**: 12 random bytes, regenerated on every encryption.
//! - **ciphertext**: AES-256-GCM output with the auth tag appended.
//!
//! Decoding is staged so callers can tell the failure modes apart:
//! JSON shape problems map to `InvalidVaultFormat`, invalid base64 to
//! `InvalidEncoding`, and wrong field lengths or an unknown kdf tag
//! back to `InvalidVaultFormat`.

use std::fs;
use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::entry::VaultContents;
use crate::crypto::encryption::NONCE_LEN;
use crate::crypto::kdf::SALT_LEN;
use crate::errors::{PassVaultError, Result};

/// KDF tag written into every envelope.
pub const KDF_ARGON2ID: &str = "argon2id";

// ---------------------------------------------------------------------------
// VaultEnvelope
// ---------------------------------------------------------------------------

/// The on-disk encrypted representation of a vault.
///
/// Immutable once written: every save produces a brand-new envelope
/// with fresh keying material, superseding the previous file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultEnvelope {
    /// Key-derivation scheme tag (currently always `"argon2id"`).
    pub kdf: String,

    /// Salt for password-based key derivation.
    pub salt: [u8; SALT_LEN],

    /// AEAD nonce for this envelope's ciphertext.
    pub nonce: [u8; NONCE_LEN],

    /// Authenticated-encrypted entries JSON, auth tag appended.
    pub ciphertext: Vec<u8>,
}

/// Wire form of the envelope: every binary field as a base64 string.
#[derive(Serialize, Deserialize)]
struct RawEnvelope {
    kdf: String,
    salt: String,
    nonce: String,
    ciphertext: String,
}

// ---------------------------------------------------------------------------
// Entries codec
// ---------------------------------------------------------------------------

/// Serialize vault contents to their canonical JSON bytes.
pub fn serialize_entries(contents: &VaultContents) -> Result<Vec<u8>> {
    serde_json::to_vec(contents)
        .map_err(|e| PassVaultError::SerializationError(format!("entries: {e}")))
}

/// Deserialize vault contents from plaintext JSON bytes.
///
/// Fails with `InvalidVaultFormat` if the bytes do not decode to an
/// entries list, or if any entry lacks a `name`.
pub fn deserialize_entries(bytes: &[u8]) -> Result<VaultContents> {
    serde_json::from_slice(bytes)
        .map_err(|e| PassVaultError::InvalidVaultFormat(format!("entries JSON: {e}")))
}

// ---------------------------------------------------------------------------
// Envelope codec
// ---------------------------------------------------------------------------

/// Render an envelope as the JSON document stored on disk.
pub fn encode_envelope(envelope: &VaultEnvelope) -> Result<Vec<u8>> {
    let raw = RawEnvelope {
        kdf: envelope.kdf.clone(),
        salt: BASE64.encode(envelope.salt),
        nonce: BASE64.encode(envelope.nonce),
        ciphertext: BASE64.encode(&envelope.ciphertext),
    };

    serde_json::to_vec(&raw)
        .map_err(|e| PassVaultError::SerializationError(format!("envelope: {e}")))
}

/// Parse the JSON document stored on disk back into an envelope.
pub fn decode_envelope(text: &str) -> Result<VaultEnvelope> {
    let raw: RawEnvelope = serde_json::from_str(text)
        .map_err(|e| PassVaultError::InvalidVaultFormat(format!("envelope JSON: {e}")))?;

    if raw.kdf != KDF_ARGON2ID {
        return Err(PassVaultError::InvalidVaultFormat(format!(
            "unsupported kdf '{}', expected '{KDF_ARGON2ID}'",
            raw.kdf
        )));
    }

    let salt_bytes = decode_field("salt", &raw.salt)?;
    let nonce_bytes = decode_field("nonce", &raw.nonce)?;
    let ciphertext = decode_field("ciphertext", &raw.ciphertext)?;

    let salt: [u8; SALT_LEN] = salt_bytes.as_slice().try_into().map_err(|_| {
        PassVaultError::InvalidVaultFormat(format!(
            "salt must be {SALT_LEN} bytes, got {}",
            salt_bytes.len()
        ))
    })?;

    let nonce: [u8; NONCE_LEN] = nonce_bytes.as_slice().try_into().map_err(|_| {
        PassVaultError::InvalidVaultFormat(format!(
            "nonce must be {NONCE_LEN} bytes, got {}",
            nonce_bytes.len()
        ))
    })?;

    Ok(VaultEnvelope {
        kdf: raw.kdf,
        salt,
        nonce,
        ciphertext,
    })
}

/// Decode one base64 field, naming it in the error on failure.
fn decode_field(field: &str, value: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(value)
        .map_err(|e| PassVaultError::InvalidEncoding(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Atomic persistence
// ---------------------------------------------------------------------------

/// Durably replace the file at `path` with exactly `bytes`.
///
/// 1. Write to a temp file in the same directory, so the final rename
///    stays on one filesystem.
/// 2. fsync the temp file, so the data is on stable storage before it
///    becomes visible under the real name.
/// 3. Rename the temp file over the target path.
///
/// A reader never observes a truncated or mixed file: until the rename
/// the old content is intact, after it the new content is complete.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    let write_result = (|| -> Result<()> {
        let mut tmp = fs::File::create(&tmp_path)?;
        tmp.write_all(bytes)?;
        tmp.sync_all()?;
        Ok(())
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}

/// Encode a vault envelope and write it to disk atomically.
pub fn write_vault(path: &Path, envelope: &VaultEnvelope) -> Result<()> {
    let bytes = encode_envelope(envelope)?;
    atomic_write(path, &bytes)
}

/// Read and parse a vault file from disk.
///
/// Failure modes are user-distinguishable: `VaultNotFound` when no file
/// exists at `path`, `InvalidTextEncoding` when the file's bytes are
/// not UTF-8 text, `Io` for underlying storage failures, and the
/// `decode_envelope` errors for anything structurally wrong.
pub fn read_vault(path: &Path) -> Result<VaultEnvelope> {
    if !path.exists() {
        return Err(PassVaultError::VaultNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    let text = String::from_utf8(data)
        .map_err(|_| PassVaultError::InvalidTextEncoding(path.to_path_buf()))?;

    decode_envelope(&text)
}
