//! Bulletin retrieval.
//!
//! The pipeline consumes a complete document; any network or HTTP failure is
//! reported as [`ForecastError::Fetch`] before the pipeline runs.

use std::future::Future;
use std::time::Duration;

use aurora_core::error::{ForecastError, Result};
use tracing::{debug, info};

/// Supplies the raw bulletin text for one run.
pub trait BulletinSource {
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches the bulletin over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpBulletinSource {
    client: reqwest::Client,
    url: String,
}

impl HttpBulletinSource {
    /// Create a source for `url` with a 30-second request timeout.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("aurora-alert/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ForecastError::Fetch(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BulletinSource for HttpBulletinSource {
    async fn fetch(&self) -> Result<String> {
        info!("Fetching bulletin: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ForecastError::Fetch(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ForecastError::Fetch(e.to_string()))?;
        debug!(bytes = text.len(), "bulletin received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;

    #[tokio::test]
    async fn test_http_source_returns_body() {
        let (url, server) = serve_once("200 OK", "NOAA Kp index breakdown").await;
        let source = HttpBulletinSource::new(url).unwrap();

        let text = source.fetch().await.unwrap();
        assert_eq!(text, "NOAA Kp index breakdown");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET / "));
    }

    #[tokio::test]
    async fn test_http_source_error_status_is_fetch_error() {
        let (url, _server) = serve_once("503 Service Unavailable", "busy").await;
        let source = HttpBulletinSource::new(url).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ForecastError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_http_source_unreachable_is_fetch_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpBulletinSource::new(format!("http://{addr}/")).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ForecastError::Fetch(_)));
    }

    #[test]
    fn test_http_source_keeps_url() {
        let source = HttpBulletinSource::new("https://example.test/b.txt").unwrap();
        assert_eq!(source.url(), "https://example.test/b.txt");
    }
}
