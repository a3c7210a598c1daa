//! CLI entry point and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};

/// Parse arguments, install the tracing subscriber, and dispatch.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Serve(cmd) => commands::serve::run(cmd).await,
        Commands::Summary(cmd) => commands::summary::run(cmd).await,
    }
}
