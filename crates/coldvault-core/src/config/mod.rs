//! Desktop runtime configuration.
//!
//! Stored as JSON under the platform config directory. A missing file means
//! defaults; an unreadable one is reported and replaced by defaults so the
//! shell still starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{Account, ThemeMode};
use crate::{Error, Result};

const CONFIG_DIR: &str = "coldvault";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_SIMULATE_INTERVAL_MS: u64 = 4_000;

/// User-facing configuration for the desktop shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name shown in the account dropdown
    pub display_name: String,
    pub theme: ThemeMode,
    /// Whether an application password has been set
    pub password_configured: bool,
    pub accounts: Vec<Account>,
    /// Run a local producer that publishes sync lifecycle messages
    pub simulate_sync: bool,
    /// Delay between simulated lifecycle messages
    pub simulate_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_name: "Satoshi".to_string(),
            theme: ThemeMode::System,
            password_configured: false,
            accounts: Vec::new(),
            simulate_sync: false,
            simulate_interval_ms: DEFAULT_SIMULATE_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, logging and falling back to defaults on failure.
    ///
    /// Returns the config and whether it is safe to save back to `path`. An
    /// unreadable file is first copied to `config.json.bak`; if that copy
    /// fails, saving stays disabled so the original bytes are never lost.
    pub fn load_or_default(path: &Path) -> (Self, bool) {
        match Self::load_from(path) {
            Ok(config) => (config, true),
            Err(error) => {
                tracing::warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    error
                );
                let writable = match backup_config(path) {
                    Ok(backup) => {
                        tracing::warn!("Kept unreadable config at {}", backup.display());
                        true
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to back up {}: {}. Settings will not be saved.",
                            path.display(),
                            e
                        );
                        false
                    }
                };
                (Self::default(), writable)
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.simulate_sync && self.simulate_interval_ms == 0 {
            return Err(Error::Config(
                "simulate_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Copy `path` next to itself with a `.bak` extension
fn backup_config(path: &Path) -> Result<PathBuf> {
    let backup = path.with_extension("json.bak");
    fs::copy(path, &backup)?;
    Ok(backup)
}

/// Platform config file location, e.g. `~/.config/coldvault/config.json`
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or_else(|| Error::Config("no config directory on this platform".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"password_configured":true,"accounts":[{"name":"Main","currency":"ETH"}]}"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.password_configured);
        assert_eq!(config.accounts.len(), 1);
        assert_eq!(config.display_name, "Satoshi");
        assert_eq!(config.simulate_interval_ms, DEFAULT_SIMULATE_INTERVAL_MS);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            theme: ThemeMode::Dark,
            simulate_sync: true,
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn zero_interval_is_rejected_when_simulating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"simulate_sync":true,"simulate_interval_ms":0}"#).unwrap();

        let error = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
        let (config, writable) = AppConfig::load_or_default(&path);
        assert_eq!(config, AppConfig::default());
        assert!(writable);
    }

    #[test]
    fn saving_after_fallback_keeps_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let original = r#"{"password_configured":true,"accounts":[{"name":"Main","currency":"BTC"}],}"#;
        fs::write(&path, original).unwrap();

        let (mut config, writable) = AppConfig::load_or_default(&path);
        assert!(writable);
        config.theme = ThemeMode::Dark;
        config.save_to(&path).unwrap();

        let backup = fs::read_to_string(dir.path().join("config.json.bak")).unwrap();
        assert_eq!(backup, original);
        assert!(backup.contains("Main"));
    }

    #[test]
    fn missing_file_is_writable_without_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (config, writable) = AppConfig::load_or_default(&path);
        assert_eq!(config, AppConfig::default());
        assert!(writable);
        assert!(!dir.path().join("config.json.bak").exists());
    }
}
