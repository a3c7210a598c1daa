//! HTTP feed source.

use async_trait::async_trait;
use scanboard_core::RawFinding;
use tracing::debug;

use super::FindingSource;
use crate::SrvError;

/// Fetches a JSON array of raw findings from an HTTP endpoint.
pub struct FeedSource {
    url: String,
    http: reqwest::Client,
}

impl FeedSource {
    /// Create a source fetching from the given URL.
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FindingSource for FeedSource {
    async fn fetch(&self) -> crate::Result<Vec<RawFinding>> {
        debug!(url = %self.url, "fetching findings feed");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SrvError::Source(format!("feed request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SrvError::Source(format!(
                "feed returned {} for {}",
                response.status(),
                self.url
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SrvError::Source(format!("feed body invalid: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_valid_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/findings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "status": "PASS",
                "severity": "low",
                "service": "appinsights",
                "check_id": "appinsights_ensure_is_configured",
                "timestamp": "2024-05-01T12:00:00Z"
            }])))
            .mount(&server)
            .await;

        let source = FeedSource::new(format!("{}/findings", server.uri()));
        let batch = source.fetch().await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].severity, "low");
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_source_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = FeedSource::new(server.uri());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SrvError::Source(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_is_source_error() {
        // Nothing listens here.
        let source = FeedSource::new("http://127.0.0.1:1/findings".into());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SrvError::Source(_)));
    }
}
