//! The built-in synthetic dataset as an in-memory handoff.

use async_trait::async_trait;
use chrono::Utc;
use scanboard_core::{sample, RawFinding};

use super::FindingSource;

/// Serves the built-in sample findings, anchored at fetch time.
///
/// The default source: lets the dashboard run with zero external setup.
pub struct SampleSource;

#[async_trait]
impl FindingSource for SampleSource {
    async fn fetch(&self) -> crate::Result<Vec<RawFinding>> {
        Ok(sample::raw_findings_at(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_fetch() {
        let batch = SampleSource.fetch().await.unwrap();
        assert_eq!(batch.len(), 21);
    }
}
