//! Configuration management module

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::PathBuf;

use crate::model::Config;

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_path = Config::config_path();
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(config_path)
}

/// Load the configuration, writing the defaults on first run.
///
/// A default file that cannot be written is only logged; the defaults are
/// still returned.
pub fn load_or_create_config() -> Result<Config> {
    let config_path = Config::config_path();

    if config_path.exists() {
        debug!("loading config from {}", config_path.display());
        return Config::load()
            .with_context(|| format!("Invalid config file {}", config_path.display()));
    }

    let config = Config::default();
    match save_config(&config) {
        Ok(()) => debug!("created default config at {}", config_path.display()),
        Err(e) => warn!("could not write {}: {:#}", config_path.display(), e),
    }
    Ok(config)
}

/// Save configuration
pub fn save_config(config: &Config) -> Result<()> {
    ensure_config_dir()?;
    config.save()
}
