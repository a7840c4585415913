//! Info command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the info command
pub fn execute(ctx: &Context) -> Result<()> {
    let store = ctx.store();
    let manager = ctx.backup_manager();

    println!("{:<14} {}", "Shell:".bold(), ctx.shell_type.to_string().cyan());
    println!(
        "{:<14} {}",
        "Config file:".bold(),
        ctx.config_file.display()
    );

    if store.exists() {
        let aliases = store.load_aliases()?;
        println!("{:<14} {}", "Aliases:".bold(), aliases.len());
    } else {
        println!("{:<14} {}", "Aliases:".bold(), "file does not exist".dimmed());
    }

    println!(
        "{:<14} {}",
        "Backup dir:".bold(),
        manager.backup_dir().display()
    );
    println!(
        "{:<14} {} (max {})",
        "Backups:".bold(),
        manager.list_backups()?.len(),
        manager.max_backups()
    );

    Ok(())
}
