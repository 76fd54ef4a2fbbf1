//! Single-run forecast coordinator.
//!
//! Composes the fetch collaborator, the extraction pipeline, the alert
//! decision and the delivery collaborator. Each call to
//! [`ForecastRunner::run_once`] is independent; the runner holds no state
//! between runs, so scheduled invocations need no locking.

use serde::Serialize;
use tracing::{error, info, warn};

use aurora_core::alert::{decide_alert, AlertConfig, AlertDecision};
use aurora_core::error::Result;
use aurora_core::notifications::{format_kp, NotificationConfig, NotificationPayload};
use aurora_data::analysis::{analyze_bulletin, AnalysisResult};

use crate::notifier::Notifier;
use crate::source::BulletinSource;

// ── Public types ──────────────────────────────────────────────────────────────

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub analysis: AnalysisResult,
    pub decision: AlertDecision,
    /// `true` once the notifier accepted the payload.
    pub notified: bool,
    /// Delivery failure reported by the notifier, if any.
    pub delivery_error: Option<String>,
}

// ── ForecastRunner ────────────────────────────────────────────────────────────

/// Runs fetch → pipeline → decision → notification for one bulletin.
pub struct ForecastRunner<S, N> {
    source: S,
    notifier: N,
    alert: AlertConfig,
    notification: NotificationConfig,
    /// URL quoted in the alert body.
    source_url: String,
}

impl<S: BulletinSource, N: Notifier> ForecastRunner<S, N> {
    pub fn new(
        source: S,
        notifier: N,
        alert: AlertConfig,
        notification: NotificationConfig,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            notifier,
            alert,
            notification,
            source_url: source_url.into(),
        }
    }

    /// Execute one run against the bulletin for `year`.
    ///
    /// Fetch and pipeline failures are returned and nothing is sent. A
    /// delivery failure is logged and recorded in the outcome instead.
    pub async fn run_once(&self, year: i32) -> Result<RunOutcome> {
        let document = self.source.fetch().await?;
        let analysis = analyze_bulletin(&document, year, self.alert.top_n)?;
        let decision = decide_alert(&analysis.ranked, self.alert.threshold, &self.source_url);

        let mut outcome = RunOutcome {
            analysis,
            decision,
            notified: false,
            delivery_error: None,
        };

        if !outcome.decision.should_alert {
            info!(
                threshold = self.alert.threshold,
                max = ?outcome.analysis.metadata.max_value,
                "forecast below alert threshold"
            );
            return Ok(outcome);
        }

        if let Some(trigger) = &outcome.decision.trigger {
            info!(
                "Kp {} forecast at {} on {}",
                format_kp(trigger.value()),
                trigger.time(),
                trigger.date()
            );
        }

        let Some(payload) = NotificationPayload::from_decision(&outcome.decision, &self.notification)
        else {
            warn!("alert triggered but sender or recipient is not configured; not notifying");
            return Ok(outcome);
        };

        match self.notifier.deliver(&payload).await {
            Ok(()) => outcome.notified = true,
            Err(e) => {
                error!(error = %e, "alert delivery failed");
                outcome.delivery_error = Some(e.to_string());
            }
        }

        Ok(outcome)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
