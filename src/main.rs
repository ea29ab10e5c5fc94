use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.resolved_command() {
        Commands::Verify { strict } => commands::handle_verify(cli.json, strict)?,
        Commands::Constants => commands::handle_constants(cli.json)?,
        Commands::Fibonacci { n } => commands::handle_fibonacci(cli.json, n)?,
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
