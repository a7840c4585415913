//! Core data models for shalias

mod alias;
mod config;
mod shell;

pub use alias::Alias;
pub use config::{BackupConfig, Config, DEFAULT_MAX_BACKUPS};
pub use shell::ShellType;
