//! Plain-text rendering of a run outcome.

use std::fmt::Write;

use aurora_core::notifications::format_kp;
use aurora_runtime::orchestrator::RunOutcome;

/// Render the ranked forecast table followed by the alert outcome.
pub fn render(outcome: &RunOutcome, threshold: f64) -> String {
    let ranked = &outcome.analysis.ranked;
    let time_width = column_width("Time", ranked.iter().map(|r| r.time()));
    let date_width = column_width("Date", ranked.iter().map(|r| r.date()));

    let mut out = String::new();
    let _ = writeln!(out, "Top {} Kp forecast slots", ranked.len());
    let _ = writeln!(
        out,
        "{:<4}  {:<tw$}  {:<dw$}  {:>5}",
        "Rank",
        "Time",
        "Date",
        "Kp",
        tw = time_width,
        dw = date_width
    );
    for entry in ranked {
        let _ = writeln!(
            out,
            "{:<4}  {:<tw$}  {:<dw$}  {:>5}",
            entry.rank,
            entry.time(),
            entry.date(),
            format_kp(entry.value()),
            tw = time_width,
            dw = date_width
        );
    }

    let decision = &outcome.decision;
    let status = match (&decision.trigger, outcome.notified, &outcome.delivery_error) {
        (None, _, _) => format!("no alert (threshold {})", format_kp(threshold)),
        (Some(_), true, _) => "alert sent".to_string(),
        (Some(_), false, Some(e)) => format!("alert delivery failed: {}", e),
        (Some(_), false, None) => "alert triggered, not delivered".to_string(),
    };
    let _ = writeln!(out, "\nStatus: {}", status);
    let _ = writeln!(out, "Source: {}", decision.source_url);
    out
}

fn column_width<'a>(title: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(str::len).chain(std::iter::once(title.len())).max().unwrap_or(0)
}
