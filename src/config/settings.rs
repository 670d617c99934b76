use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.  The Argon2 values can only raise
/// the cost: anything below the crypto layer's floor is rejected at
/// derive time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file used when `--file` is not passed.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Argon2 memory cost in KiB (default: 64 MiB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 2).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 1).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "passvault.json".to_string()
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MiB
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the vault file path: an explicit `--file` argument wins,
    /// otherwise the configured default is used, relative to `dir`.
    pub fn vault_path(&self, dir: &Path, file_arg: Option<&str>) -> PathBuf {
        match file_arg {
            Some(file) => dir.join(file),
            None => dir.join(&self.vault_file),
        }
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> crate::crypto::kdf::Argon2Params {
        crate::crypto::kdf::Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_file, "passvault.json");
        assert_eq!(s.argon2_memory_kib, 65_536);
        assert_eq!(s.argon2_iterations, 2);
        assert_eq!(s.argon2_parallelism, 1);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "passvault.json");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_file = "secrets.json"
argon2_memory_kib = 131072
argon2_iterations = 4
argon2_parallelism = 2
"#;
        fs::write(tmp.path().join(".passvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "secrets.json");
        assert_eq!(settings.argon2_memory_kib, 131_072);
        assert_eq!(settings.argon2_iterations, 4);
        assert_eq!(settings.argon2_parallelism, 2);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let config = "vault_file = \"work.json\"\n";
        fs::write(tmp.path().join(".passvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "work.json");
        // Rest should be defaults
        assert_eq!(settings.argon2_memory_kib, 65_536);
        assert_eq!(settings.argon2_iterations, 2);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".passvault.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn vault_path_prefers_explicit_file() {
        let s = Settings::default();
        let dir = Path::new("/home/user/project");

        let path = s.vault_path(dir, Some("work.json"));
        assert_eq!(path, PathBuf::from("/home/user/project/work.json"));
    }

    #[test]
    fn vault_path_falls_back_to_config() {
        let s = Settings {
            vault_file: "team.json".to_string(),
            ..Settings::default()
        };
        let dir = Path::new("/home/user/project");

        let path = s.vault_path(dir, None);
        assert_eq!(path, PathBuf::from("/home/user/project/team.json"));
    }
}
