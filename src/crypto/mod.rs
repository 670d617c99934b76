//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - Argon2id password-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, generate_nonce};
pub use kdf::{derive_key, derive_key_with_params, generate_salt, Argon2Params};
