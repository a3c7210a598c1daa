//! Run the dashboard server.

use anyhow::{Context, Result};

use scanboard_srv::{server, ServerConfig};

use crate::cli::args::ServeArgs;

pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::load(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;

    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    server::run(&config).await.context("dashboard server failed")
}
