use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Unable to unlock vault — wrong password or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Random source failure: {0}")]
    RngFailure(String),

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("File at {0} is not readable text — is it really a vault file?")]
    InvalidTextEncoding(PathBuf),

    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("Invalid base64 in vault field: {0}")]
    InvalidEncoding(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
