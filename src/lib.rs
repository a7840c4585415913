//! shalias - Shell Alias Manager
//!
//! Manage `alias` lines in Bash, Zsh and Fish configuration files.
//!
//! # Features
//!
//! - Parse alias lines and format new ones for the target shell
//! - Add, replace and remove aliases with atomic whole-file rewrites
//! - Timestamped backups before every change, rotated and compressed with `xz`
//! - Restore from any backup, or the latest one
//! - Detect the active shell and its configuration file

pub mod backup;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod utils;

pub use backup::BackupManager;
pub use error::{Error, Result};
pub use model::{Alias, Config, ShellType};
pub use store::AliasStore;
