//! CLI command implementations

pub mod add;
pub mod backup;
pub mod info;
pub mod list;
pub mod remove;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::Context;

/// Run the selected subcommand
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::List { query } => list::execute(ctx, query.as_deref()),
        Commands::Add {
            definition,
            command,
            on_conflict,
        } => add::execute(ctx, definition, command.as_deref(), *on_conflict),
        Commands::Remove { name } => remove::execute(ctx, name),
        Commands::Backup { backup_command } => backup::execute(ctx, backup_command),
        Commands::Info => info::execute(ctx),
    }
}
