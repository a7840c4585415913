//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of backups kept per configuration file
pub const DEFAULT_MAX_BACKUPS: usize = 20;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackupConfig {
    /// Total backups retained; the newer half stays uncompressed
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    /// Backup directory override (defaults to `~/.shellbackup`)
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_max_count() -> usize {
    DEFAULT_MAX_BACKUPS
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            max_count: default_max_count(),
            directory: None,
        }
    }
}

impl Config {
    /// Get the shalias configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("shalias")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
