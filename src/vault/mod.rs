//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `VaultContents` types (`entry`)
//! - The JSON envelope codec and atomic on-disk persistence (`format`)
//! - The stateless engine: `create`, `open`, `save`, and the path-level
//!   `init_vault` / `load_entries` / `save_entries` (`store`)

pub mod entry;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{Entry, VaultContents};
pub use format::VaultEnvelope;
pub use store::{create, init_vault, load_entries, open, save, save_entries};
