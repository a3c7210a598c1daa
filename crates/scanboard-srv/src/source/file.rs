//! JSON file source.

use async_trait::async_trait;
use scanboard_core::RawFinding;
use std::path::PathBuf;
use tracing::debug;

use super::FindingSource;
use crate::SrvError;

/// Reads a JSON array of raw findings from disk on every fetch.
///
/// The file is re-read whole on each refresh; there is no change
/// detection. A missing or unparseable file is a source failure, not an
/// empty batch.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from the given path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FindingSource for FileSource {
    async fn fetch(&self) -> crate::Result<Vec<RawFinding>> {
        debug!(path = %self.path.display(), "reading findings file");

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SrvError::Source(format!("failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SrvError::Source(format!("failed to parse {}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_valid_file() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmpfile,
            r#"[{{
                "status": "FAIL",
                "severity": "high",
                "service": "monitor",
                "check_id": "monitor_alert_delete_nsg",
                "timestamp": "2024-05-01T12:00:00Z"
            }}]"#
        )
        .unwrap();

        let source = FileSource::new(tmpfile.path().to_path_buf());
        let batch = source.fetch().await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].status, "FAIL");
        assert_eq!(batch[0].service, "monitor");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_source_error() {
        let source = FileSource::new(PathBuf::from("/tmp/nonexistent_scanboard_findings.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SrvError::Source(_)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_source_error() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "not json").unwrap();

        let source = FileSource::new(tmpfile.path().to_path_buf());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SrvError::Source(_)));
    }
}
