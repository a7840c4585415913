//! Backup command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use time::{OffsetDateTime, UtcOffset};

use crate::backup::rotation::RotationOutcome;
use crate::backup::{format_timestamp, BackupManager};
use crate::cli::args::BackupCommands;
use crate::cli::Context;

/// Execute the backup command
pub fn execute(ctx: &Context, backup_cmd: &BackupCommands) -> Result<()> {
    let manager = ctx.backup_manager();

    match backup_cmd {
        BackupCommands::Create => create_backup(ctx, &manager),
        BackupCommands::List => list_backups(&manager),
        BackupCommands::Restore { path } => restore_backup(ctx, &manager, path.as_deref()),
        BackupCommands::Rotate => rotate_backups(&manager),
    }
}

fn create_backup(ctx: &Context, manager: &BackupManager) -> Result<()> {
    let path = manager.create_backup()?;
    ctx.print_success(&format!("Created backup {}", path.display().to_string().cyan()));
    Ok(())
}

fn list_backups(manager: &BackupManager) -> Result<()> {
    let backups = manager.list_entries()?;

    if backups.is_empty() {
        println!("{}", "No backups found.".dimmed());
        return Ok(());
    }

    println!(
        "{} {}",
        "Backups in".bold(),
        manager.backup_dir().display().to_string().bold()
    );
    println!();

    println!(
        "{:<44} {:<16} {}",
        "FILE".bold().cyan(),
        "MODIFIED".bold().cyan(),
        "SIZE".bold().cyan()
    );
    println!("{}", "─".repeat(72).dimmed());

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    for backup in &backups {
        let name = if backup.compressed {
            backup.file_name.yellow()
        } else {
            backup.file_name.white()
        };
        println!(
            "{:<44} {:<16} {}",
            name,
            format_timestamp(OffsetDateTime::from(backup.modified).to_offset(offset)).dimmed(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!("{}", format!("Total: {} backup(s)", backups.len()).dimmed());

    Ok(())
}

fn restore_backup(ctx: &Context, manager: &BackupManager, path: Option<&Path>) -> Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => manager
            .last_backup_path()?
            .ok_or(crate::error::Error::NoBackup)?,
    };

    println!("Restoring backup: {}", target.display().to_string().cyan());

    if !ctx.confirm("This will overwrite your current configuration. Continue?")? {
        println!("Cancelled.");
        return Ok(());
    }

    manager.restore_from_backup(&target)?;

    println!(
        "{} Restored backup to {}",
        "✓".green(),
        ctx.config_file.display().to_string().cyan()
    );

    ctx.print_reload_hint();

    Ok(())
}

fn rotate_backups(manager: &BackupManager) -> Result<()> {
    let report = manager.rotate();

    for (path, outcome) in &report.outcomes {
        let name = path.display().to_string();
        match outcome {
            RotationOutcome::Compressed(_) => println!("{} {}", "compressed".yellow(), name),
            RotationOutcome::Deleted => println!("{} {}", "deleted".red(), name),
            RotationOutcome::CompressFailed(msg) | RotationOutcome::DeleteFailed(msg) => {
                eprintln!("{} {}: {}", "✗".red(), name, msg)
            }
            RotationOutcome::Kept | RotationOutcome::AlreadyCompressed => {}
        }
    }

    println!(
        "{}",
        format!(
            "{} backup(s): {} compressed, {} deleted, {} failed",
            report.outcomes.len(),
            report.compressed(),
            report.deleted(),
            report.failures().count()
        )
        .dimmed()
    );

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
