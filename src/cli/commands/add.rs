//! Add command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::ConflictStrategy;
use crate::cli::Context;
use crate::codec;
use crate::model::Alias;

/// Execute the add command
pub fn execute(
    ctx: &Context,
    definition: &str,
    command: Option<&str>,
    on_conflict: ConflictStrategy,
) -> Result<()> {
    let alias = build_alias(definition, command)?;
    codec::validate(&alias)?;

    let store = ctx.store();
    let existing: Vec<Alias> = if store.exists() {
        store
            .load_aliases()?
            .into_iter()
            .filter(|a| a.name == alias.name)
            .collect()
    } else {
        Vec::new()
    };

    if existing.contains(&alias) && on_conflict != ConflictStrategy::Allow {
        ctx.print_warning(&format!("Alias '{}' is already defined that way", alias.name));
        return Ok(());
    }

    let overwrite = match existing.first() {
        None => false,
        Some(current) => match on_conflict {
            ConflictStrategy::Skip => {
                ctx.print_warning(&format!("Alias '{}' already exists, skipping", alias.name));
                return Ok(());
            }
            ConflictStrategy::Overwrite => true,
            ConflictStrategy::Allow => false,
            ConflictStrategy::Ask => {
                println!(
                    "Alias '{}' already exists: {}",
                    alias.name.cyan(),
                    current.command.dimmed()
                );
                if !ctx.confirm("Overwrite?")? {
                    println!("Skipped.");
                    return Ok(());
                }
                true
            }
        },
    };

    ctx.backup_before_change()?;

    if overwrite {
        store.replace_alias(&alias)?;
        ctx.print_success(&format!("Updated alias {}", alias.to_string().cyan()));
    } else {
        store.add_alias(&alias)?;
        ctx.print_success(&format!("Added alias {}", alias.to_string().cyan()));
    }

    ctx.print_reload_hint();

    Ok(())
}

fn build_alias(definition: &str, command: Option<&str>) -> Result<Alias> {
    match command {
        Some(command) => Ok(Alias::new(definition.trim(), command.trim())),
        None => Alias::from_definition(definition)
            .ok_or_else(|| anyhow::anyhow!("Invalid alias format. Use: NAME=COMMAND or NAME COMMAND")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_alias() {
        assert_eq!(
            build_alias("ll=ls -la", None).unwrap(),
            Alias::new("ll", "ls -la")
        );
        assert_eq!(
            build_alias("gs", Some("git status")).unwrap(),
            Alias::new("gs", "git status")
        );
        assert!(build_alias("ll", None).is_err());
    }
}
