//! Remove command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the remove command
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let store = ctx.store();
    let matches: Vec<_> = store
        .load_aliases()?
        .into_iter()
        .filter(|a| a.name == name)
        .collect();

    if matches.is_empty() {
        anyhow::bail!("Alias '{}' not found in {}", name, ctx.config_file.display());
    }

    for alias in &matches {
        println!("Found alias '{}' = '{}'", name.cyan(), alias.command.dimmed());
    }

    let prompt = if matches.len() > 1 {
        format!("Remove all {} definitions?", matches.len())
    } else {
        "Remove this alias?".to_string()
    };
    if !ctx.confirm(&prompt)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.backup_before_change()?;
    let removed = store.remove_alias(name)?;

    ctx.print_success(&format!("Removed alias '{}' ({} line(s))", name, removed));
    ctx.print_reload_hint();

    Ok(())
}
