//! Column-label inference from the table's first line.

use std::sync::OnceLock;

use aurora_core::error::{ForecastError, Result};
use aurora_core::models::HeaderRow;
use regex::Regex;
use tracing::debug;

/// Three letters, a single space, then a one- or two-digit day (`Aug 9`).
fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]{3} \d{1,2}").expect("regex is valid"))
}

/// Derive the header from the first line of the sanitized table.
///
/// Whitespace runs are collapsed before matching, so `Aug 9      Aug 10`
/// yields `["time", "Aug 9", "Aug 10"]`. Tokens keep their spelling (a
/// zero-padded `Aug 09` stays as is).
pub fn infer_header(line: &str) -> Result<HeaderRow> {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");

    let dates: Vec<&str> = date_token_re()
        .find_iter(&collapsed)
        .map(|m| m.as_str())
        .collect();

    if dates.is_empty() {
        return Err(ForecastError::HeaderInference(collapsed));
    }

    debug!(?dates, "inferred header columns");
    Ok(HeaderRow::from_dates(dates))
}
