//! AES-256-GCM authenticated encryption.
//!
//! The nonce is an explicit argument rather than being prepended to the
//! ciphertext, because the vault envelope stores it as its own field.
//! Callers must supply a fresh random nonce (`generate_nonce`) for
//! every encryption; reusing a (key, nonce) pair destroys both the
//! confidentiality and the integrity guarantees of GCM.
//!
//! The returned ciphertext carries the 16-byte auth tag appended.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::crypto::kdf::KEY_LEN;
use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key` and a caller-supplied nonce.
///
/// No associated data is bound to the ciphertext.
pub fn encrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails with `DecryptionFailed` on any auth-tag mismatch.  A wrong
/// password, a wrong nonce, and a tampered ciphertext are deliberately
/// indistinguishable at this layer.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    // Anything shorter than the tag cannot be a valid AEAD output.
    if ciphertext.len() < TAG_LEN {
        return Err(PassVaultError::DecryptionFailed);
    }

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassVaultError::DecryptionFailed)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)
}

/// Generate a fresh random 12-byte nonce from the OS CSPRNG.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let mut out = [0u8; NONCE_LEN];
    out.copy_from_slice(&nonce);
    out
}
