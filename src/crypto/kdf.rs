//! Password-based key derivation using Argon2id.
//!
//! Argon2id is a memory-hard KDF that protects against brute-force and
//! GPU-based attacks.  Parameters are configurable via `Argon2Params`
//! (loaded from `.passvault.toml` or the built-in defaults), but only
//! upward: the defaults are a floor, and anything weaker is rejected.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Minimum memory cost in KiB (64 MiB).
const MIN_MEMORY_KIB: u32 = 65_536;

/// Minimum number of iterations.
const MIN_ITERATIONS: u32 = 2;

/// Configurable Argon2id parameters.
///
/// These map 1:1 to the fields in `Settings` so the CLI can pass
/// whatever the user configured in `.passvault.toml`.  The defaults sit
/// exactly on the enforced floor.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MiB).
    pub memory_kib: u32,
    /// Number of iterations (default: 2).
    pub iterations: u32,
    /// Parallelism lanes (default: 1).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Derive a 32-byte key from a password and salt using Argon2id.
///
/// Uses the default parameters (64 MiB, 2 iterations, 1 lane).
/// Prefer `derive_key_with_params` when you have a `Settings`.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> Result<[u8; KEY_LEN]> {
    derive_key_with_params(password, salt, &Argon2Params::default())
}

/// Derive a 32-byte key with explicit Argon2id parameters.
///
/// The same password + salt + params will always produce the same key.
/// Parameters below the floor are rejected so a config file can raise
/// the cost but never lower it.
pub fn derive_key_with_params(
    password: &[u8],
    salt: &[u8; SALT_LEN],
    argon2_params: &Argon2Params,
) -> Result<[u8; KEY_LEN]> {
    if argon2_params.memory_kib < MIN_MEMORY_KIB {
        return Err(PassVaultError::KeyDerivationFailed(format!(
            "Argon2 memory_kib must be at least {MIN_MEMORY_KIB} (got {})",
            argon2_params.memory_kib
        )));
    }
    if argon2_params.iterations < MIN_ITERATIONS {
        return Err(PassVaultError::KeyDerivationFailed(format!(
            "Argon2 iterations must be at least {MIN_ITERATIONS} (got {})",
            argon2_params.iterations
        )));
    }
    if argon2_params.parallelism < 1 {
        return Err(PassVaultError::KeyDerivationFailed(
            "Argon2 parallelism must be at least 1".into(),
        ));
    }

    let params = Params::new(
        argon2_params.memory_kib,
        argon2_params.iterations,
        argon2_params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| PassVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(password, salt, &mut key)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
///
/// Salts are single-use: every save of a vault draws a new one.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PassVaultError::RngFailure(format!("OS random source: {e}")))?;
    Ok(salt)
}
