//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::error::Error;
use crate::store::search;

/// Execute the list command
pub fn execute(ctx: &Context, query: Option<&str>) -> Result<()> {
    let aliases = match ctx.store().load_aliases() {
        Ok(aliases) => aliases,
        Err(Error::NotFound { path }) => {
            ctx.print_warning(&format!("No configuration file at {}", path.display()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let shown = match query {
        Some(q) => search(&aliases, q),
        None => aliases.iter().collect(),
    };

    if shown.is_empty() {
        println!("{}", "No aliases found.".dimmed());
        return Ok(());
    }

    let name_width = shown
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, 30);

    println!(
        "{:<width$}  {}",
        "NAME".bold().cyan(),
        "COMMAND".bold().cyan(),
        width = name_width
    );
    println!("{}", "─".repeat(name_width + 40).dimmed());

    for alias in &shown {
        println!(
            "{:<width$}  {}",
            alias.name.green(),
            alias.command,
            width = name_width
        );
    }

    println!();
    let total = if shown.len() == aliases.len() {
        format!("Total aliases: {}", aliases.len())
    } else {
        format!("Showing {} of {} aliases", shown.len(), aliases.len())
    };
    println!("{}", total.dimmed());

    Ok(())
}
