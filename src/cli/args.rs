//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shalias")]
#[command(about = "Shell alias manager - add, remove and back up aliases in your shell RC file")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to edit (defaults to the detected shell's RC file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell dialect
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List aliases, optionally filtered
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive text to match against name or command
        query: Option<String>,
    },

    /// Add an alias
    Add {
        /// NAME=COMMAND, or NAME when COMMAND is given separately
        definition: String,
        /// Alias command
        command: Option<String>,
        /// What to do when the name is already defined
        #[arg(long, default_value = "ask")]
        on_conflict: ConflictStrategy,
    },

    /// Remove every definition of an alias
    #[command(visible_alias = "rm")]
    Remove {
        /// Alias name
        name: String,
    },

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },

    /// Show detected shell, configuration file and backup location
    Info,
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Back up the configuration file now
    Create,
    /// List backups, newest first
    List,
    /// Restore a backup (the newest one when no path is given)
    Restore {
        /// Backup file, as printed by `backup list`
        path: Option<PathBuf>,
    },
    /// Apply the keep/compress/delete policy without creating a backup
    Rotate,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Bash,
    Zsh,
    Fish,
}

impl From<ShellArg> for crate::model::ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Bash => crate::model::ShellType::Bash,
            ShellArg::Zsh => crate::model::ShellType::Zsh,
            ShellArg::Fish => crate::model::ShellType::Fish,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ConflictStrategy {
    #[default]
    Ask,
    Skip,
    Overwrite,
    /// Keep the old definition and add another one
    Allow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from([
            "shalias",
            "-f",
            "/tmp/.zshrc",
            "add",
            "gs",
            "git status",
            "--on-conflict",
            "overwrite",
        ]);
        match cli.command {
            Commands::Add {
                definition,
                command,
                on_conflict,
            } => {
                assert_eq!(definition, "gs");
                assert_eq!(command.as_deref(), Some("git status"));
                assert_eq!(on_conflict, ConflictStrategy::Overwrite);
            }
            _ => panic!("expected add"),
        }
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/.zshrc")));
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::parse_from(["shalias", "-vv", "info"]);
        assert_eq!(cli.verbose, 2);
    }
}
