//! Alert delivery collaborators.
//!
//! A [`Notifier`] takes a finished [`NotificationPayload`] and is responsible
//! for transport and authentication. The runner does not look at delivery
//! responses beyond success or failure.

use std::future::Future;
use std::time::Duration;

use aurora_core::error::{ForecastError, Result};
use aurora_core::notifications::NotificationPayload;
use tracing::info;

/// Delivers one alert payload.
pub trait Notifier {
    fn deliver(&self, payload: &NotificationPayload) -> impl Future<Output = Result<()>> + Send;
}

// ── LogNotifier ───────────────────────────────────────────────────────────────

/// Writes the payload to the log instead of sending it (dry run).
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<()> {
        info!(
            from = %payload.from,
            to = %payload.to,
            subject = %payload.subject,
            body = %payload.body,
            "dry run: alert not delivered"
        );
        Ok(())
    }
}

// ── HttpNotifier ──────────────────────────────────────────────────────────────

/// POSTs the payload as JSON to a delivery endpoint.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpNotifier {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ForecastError::Notify(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

impl Notifier for HttpNotifier {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<()> {
        let mut request = self.client.post(&self.endpoint).json(payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ForecastError::Notify(e.to_string()))?;

        info!(status = %response.status(), to = %payload.to, "alert delivered");
        Ok(())
    }
}

// ── DeliveryChannel ───────────────────────────────────────────────────────────

/// Notifier chosen at startup from the settings.
#[derive(Debug, Clone)]
pub enum DeliveryChannel {
    Log(LogNotifier),
    Http(HttpNotifier),
}

impl DeliveryChannel {
    /// Pick HTTP delivery when an endpoint is configured and this is not a
    /// dry run; otherwise log the payload.
    pub fn select(endpoint: Option<&str>, api_key: Option<String>, dry_run: bool) -> Result<Self> {
        match endpoint {
            Some(endpoint) if !dry_run => Ok(Self::Http(HttpNotifier::new(endpoint, api_key)?)),
            _ => Ok(Self::Log(LogNotifier)),
        }
    }
}

impl Notifier for DeliveryChannel {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<()> {
        match self {
            Self::Log(n) => n.deliver(payload).await,
            Self::Http(n) => n.deliver(payload).await,
        }
    }
}
