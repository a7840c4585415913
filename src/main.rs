//! shalias - Shell Alias Manager

use anyhow::Result;
use clap::Parser;

use shalias::cli::{commands, Cli, Context};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SHALIAS_LOG", level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    log::debug!(
        "shell {} config {}",
        ctx.shell_type,
        ctx.config_file.display()
    );

    commands::execute(&ctx, &cli.command)
}
