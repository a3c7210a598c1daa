//! Server configuration for scanboard dashboard nodes.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for a scanboard dashboard server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address (default: 0.0.0.0:8050).
    pub listen: SocketAddr,

    /// How often to refresh findings from the source (seconds,
    /// default: 60). 0 disables the timer; manual refresh still works.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Where findings come from.
    #[serde(default)]
    pub source: SourceConfig,
}

/// Finding source selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Built-in synthetic findings.
    #[default]
    Sample,
    /// JSON array of raw findings on disk.
    File {
        /// Path to the findings file.
        path: PathBuf,
    },
    /// HTTP feed returning the same JSON shape.
    Feed {
        /// Feed URL.
        url: String,
    },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8050".parse().expect("valid default addr"),
            refresh_interval_secs: default_refresh_interval(),
            source: SourceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::SrvError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }
}

// Default value functions for serde.
const fn default_refresh_interval() -> u64 {
    60
}
