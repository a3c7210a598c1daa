//! Error types for the scanboard dashboard server.

use thiserror::Error;

/// Errors that can occur in dashboard server operations.
#[derive(Error, Debug)]
pub enum SrvError {
    /// Finding source could not be reached or produced malformed data.
    /// The store retains and serves the last successful load.
    #[error("source unavailable: {0}")]
    Source(String),

    /// HTTP server failed to bind or start.
    #[error("server error: {0}")]
    Server(String),

    /// Configuration is invalid or missing required fields.
    #[error("config error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
