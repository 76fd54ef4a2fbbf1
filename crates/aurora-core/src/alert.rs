//! Threshold check on the ranked forecast.
//!
//! Only the rank-1 entry decides whether an alert fires; the rest of the
//! ranked list is carried for display.

use serde::{Deserialize, Serialize};

use crate::models::RankedTuple;

/// Published 3-day space-weather forecast bulletin.
pub const BULLETIN_URL: &str = "https://services.swpc.noaa.gov/text/3-day-forecast.txt";

/// Kp value at or above which an alert fires.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Number of ranked entries kept after sorting.
pub const DEFAULT_TOP_N: usize = 5;

// ── AlertConfig ───────────────────────────────────────────────────────────────

/// Tunables for ranking and alerting, passed explicitly into each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    pub threshold: f64,
    pub top_n: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

// ── AlertDecision ─────────────────────────────────────────────────────────────

/// Outcome of comparing the top forecast value with the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDecision {
    pub should_alert: bool,
    /// The rank-1 entry, present only when `should_alert` is set.
    pub trigger: Option<RankedTuple>,
    pub source_url: String,
}

/// Decide whether the ranked forecast warrants an alert.
///
/// An empty ranking never alerts. The comparison is inclusive, so a top value
/// equal to `threshold` alerts.
pub fn decide_alert(ranked: &[RankedTuple], threshold: f64, source_url: &str) -> AlertDecision {
    let trigger = ranked
        .first()
        .filter(|top| top.value() >= threshold)
        .cloned();

    AlertDecision {
        should_alert: trigger.is_some(),
        trigger,
        source_url: source_url.to_string(),
    }
}
