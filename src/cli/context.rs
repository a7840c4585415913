//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::Confirm;
use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::model::{Config, ShellType};
use crate::store::AliasStore;
use crate::utils::path::normalize_path;
use crate::utils::shell_detect::get_shell_type;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub config_file: PathBuf,
    pub assume_yes: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_create_config()?;
        Ok(Self::new(config, cli))
    }

    pub fn new(config: Config, cli: &Cli) -> Self {
        let shell_type = get_shell_type(cli.shell.map(|s| s.into()), cli.file.as_deref());
        let config_file = match &cli.file {
            Some(file) => normalize_path(&file.to_string_lossy()),
            None => shell_type.default_config_path(),
        };

        Self {
            config,
            shell_type,
            config_file,
            assume_yes: cli.yes,
        }
    }

    pub fn store(&self) -> AliasStore {
        AliasStore::new(&self.config_file, self.shell_type)
    }

    pub fn backup_manager(&self) -> BackupManager {
        BackupManager::from_config(&self.config_file, &self.config)
    }

    /// Back up the configuration file before a change.
    ///
    /// Nothing to back up when the file does not exist yet. A failed backup
    /// aborts the change.
    pub fn backup_before_change(&self) -> Result<Option<PathBuf>> {
        if !self.config_file.exists() {
            return Ok(None);
        }
        let path = self
            .backup_manager()
            .create_backup()
            .context("Backup failed, nothing was changed")?;
        println!("{} {}", "Backup:".dimmed(), path.display().to_string().dimmed());
        Ok(Some(path))
    }

    /// Ask for confirmation unless `--yes` was given
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = self.shell_type.reload_command(&self.config_file);
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply the changes", reload_cmd).dimmed()
        );
    }
}
