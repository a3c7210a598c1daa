//! Server runner: startup load, refresh scheduling, bind and serve.

use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::http::{self, AppState};
use crate::refresh::{self, RefreshReason};
use crate::source;
use crate::store::FindingStore;

/// Start the dashboard server with the given configuration.
///
/// Performs the initial load (a failure leaves the store empty and marked
/// stale rather than aborting), spawns the refresh worker and timer, binds
/// the listener, and runs until shutdown.
pub async fn run(config: &ServerConfig) -> crate::Result<()> {
    let store = FindingStore::empty();
    let src = source::from_config(&config.source);

    // The startup load runs inline so the first request sees data.
    refresh::refresh_once(&store, src.as_ref(), RefreshReason::Startup).await;

    let refresher = refresh::spawn(
        store.clone(),
        src,
        Duration::from_secs(config.refresh_interval_secs),
    );

    let app = http::build_router(AppState { store, refresher });

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|e| crate::SrvError::Server(format!("bind {}: {e}", config.listen)))?;

    info!(
        addr = %config.listen,
        interval_secs = config.refresh_interval_secs,
        "scanboard dashboard server running"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::SrvError::Server(format!("server error: {e}")))?;

    Ok(())
}
