//! scanboard-srv: the dashboard server behind the charts.
//!
//! Holds the session's findings as an immutable, atomically swapped
//! snapshot, refreshes it from a configurable source, and serves
//! chart-ready view models over HTTP.
//!
//! # Architecture
//!
//! - `store` — snapshot holder; readers compute against the collection
//!   they grabbed, a concurrent swap never affects them
//! - `source` — where findings come from (built-in sample, JSON file,
//!   HTTP feed)
//! - `refresh` — one worker serializes refreshes; manual triggers and the
//!   periodic timer coalesce instead of piling up
//! - `http` — axum routes serving the view model, KPIs and store status
//! - `server` — startup load, bind, run

pub mod config;
pub mod error;
pub mod http;
pub mod refresh;
pub mod server;
pub mod source;
pub mod store;

// Re-exports for convenience.
pub use config::ServerConfig;
pub use error::SrvError;

/// Result type for dashboard server operations.
pub type Result<T> = std::result::Result<T, SrvError>;
