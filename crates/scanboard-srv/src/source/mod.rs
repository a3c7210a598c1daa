//! Finding sources: where the dashboard's data comes from.
//!
//! A source hands over raw records in the external scanner's wire shape;
//! the store validates them into typed findings on install. Fetching is
//! all-or-nothing per batch, there is no incremental delivery.

mod feed;
mod file;
mod sample;

pub use feed::FeedSource;
pub use file::FileSource;
pub use sample::SampleSource;

use async_trait::async_trait;
use scanboard_core::RawFinding;
use std::sync::Arc;

use crate::config::SourceConfig;

/// A provider of finding batches.
#[async_trait]
pub trait FindingSource: Send + Sync {
    /// Fetch the current batch of raw findings.
    ///
    /// A failure surfaces as [`crate::SrvError::Source`]; the caller keeps
    /// serving the previously loaded collection.
    async fn fetch(&self) -> crate::Result<Vec<RawFinding>>;
}

/// Build the source a config selects.
#[must_use]
pub fn from_config(config: &SourceConfig) -> Arc<dyn FindingSource> {
    match config {
        SourceConfig::Sample => Arc::new(SampleSource),
        SourceConfig::File { path } => Arc::new(FileSource::new(path.clone())),
        SourceConfig::Feed { url } => Arc::new(FeedSource::new(url.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_config_builds_each_kind() {
        // Each variant resolves to a source without panicking.
        let _sample = from_config(&SourceConfig::Sample);
        let _file = from_config(&SourceConfig::File {
            path: PathBuf::from("/tmp/findings.json"),
        });
        let _feed = from_config(&SourceConfig::Feed {
            url: "http://localhost:9999/findings".into(),
        });
    }
}
