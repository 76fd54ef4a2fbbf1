//! Notification payloads for aurora alerts.
//!
//! The payload is a plain-text message describing the strongest forecast
//! slot. Delivery is left to a collaborator in the runtime crate; nothing
//! here performs I/O.

use serde::{Deserialize, Serialize};

use crate::alert::AlertDecision;
use crate::models::RankedTuple;

/// Subject line used for every alert.
pub const SUBJECT: &str = "Aurora forecast";

// ── NotificationConfig ────────────────────────────────────────────────────────

/// Sender and recipient addresses supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl NotificationConfig {
    /// `true` when both addresses are present and non-blank.
    pub fn is_complete(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.trim().is_empty());
        filled(&self.from) && filled(&self.to)
    }
}

// ── NotificationPayload ───────────────────────────────────────────────────────

/// Everything the delivery collaborator needs to send one alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl NotificationPayload {
    /// Build the payload for an alerting decision.
    ///
    /// Returns `None` when the decision does not alert or when either address
    /// is missing.
    pub fn from_decision(decision: &AlertDecision, config: &NotificationConfig) -> Option<Self> {
        if !decision.should_alert || !config.is_complete() {
            return None;
        }
        let trigger = decision.trigger.as_ref()?;

        Some(Self {
            from: config.from.clone()?,
            to: config.to.clone()?,
            subject: SUBJECT.to_string(),
            body: format_body(trigger, &decision.source_url),
        })
    }
}

/// Render the plain-text alert body.
pub fn format_body(trigger: &RankedTuple, source_url: &str) -> String {
    format!(
        "\nAt {} on {} the Kp index is forecast to be {}!\n\n\nFor more details, visit:\n\n{}",
        trigger.time(),
        trigger.date(),
        format_kp(trigger.value()),
        source_url
    )
}

/// Format a Kp value, keeping one decimal for whole numbers (`6.0`, `5.33`).
pub fn format_kp(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
