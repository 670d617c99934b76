//! Configuration module — optional `.passvault.toml` settings.

pub mod settings;

pub use settings::Settings;
