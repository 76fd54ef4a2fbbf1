//! Main extraction pipeline for the aurora forecast.
//!
//! Composes the locate → sanitize → header → parse → melt → rank stages and
//! returns an [`AnalysisResult`] ready for the alert decision and display.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use aurora_core::error::{ForecastError, Result};
use aurora_core::models::{HeaderRow, RankedTuple, WideRow};

use crate::header::infer_header;
use crate::locator::{locate_table, TableAnchors};
use crate::parser::{parse_rows, split_header_line};
use crate::ranking::rank_top_n;
use crate::reshape::melt;
use crate::sanitizer::strip_annotations;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Year marker used to locate the table.
    pub year: String,
    /// Data rows kept after parsing.
    pub rows_parsed: usize,
    /// Tuples produced by the wide-to-long reshape.
    pub tuples_emitted: usize,
    /// Tuples kept after ranking.
    pub tuples_ranked: usize,
    /// Largest forecast value in the whole table.
    pub max_value: Option<f64>,
    /// Wall-clock seconds spent in the pipeline.
    pub parse_time_seconds: f64,
}

/// The complete output of [`analyze_bulletin`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Column labels after empty columns were removed.
    pub header: HeaderRow,
    /// The parsed wide table rows.
    pub rows: Vec<WideRow>,
    /// Top-N tuples, sorted by rank.
    pub ranked: Vec<RankedTuple>,
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full extraction pipeline over one bulletin.
///
/// 1. Locate the table between the anchors for `year`.
/// 2. Strip annotations.
/// 3. Infer the header from the first non-blank line.
/// 4. Parse the remaining lines into a wide table.
/// 5. Melt to long tuples and coerce values.
/// 6. Rank and keep the top `top_n`.
///
/// Any stage failure is returned as-is; nothing is substituted.
pub fn analyze_bulletin(document: &str, year: i32, top_n: usize) -> Result<AnalysisResult> {
    let start = std::time::Instant::now();
    let anchors = TableAnchors::for_year(year);

    // ── Step 1-2: Locate and sanitize ─────────────────────────────────────────
    let slice = locate_table(document, &anchors)?;
    let sanitized = strip_annotations(slice);

    // ── Step 3: Header ────────────────────────────────────────────────────────
    // An all-blank slice has no header line to infer from.
    let (header_line, body) = split_header_line(&sanitized)
        .ok_or_else(|| ForecastError::HeaderInference(String::new()))?;
    let header = infer_header(header_line)?;

    // ── Step 4-5: Parse and melt ──────────────────────────────────────────────
    let table = parse_rows(body, &header)?;
    let tuples = melt(&table)?;
    let tuples_emitted = tuples.len();
    let max_value = tuples.iter().map(|t| t.value).reduce(f64::max);

    // ── Step 6: Rank ──────────────────────────────────────────────────────────
    let ranked = rank_top_n(tuples, top_n);

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        year: anchors.year,
        rows_parsed: table.rows.len(),
        tuples_emitted,
        tuples_ranked: ranked.len(),
        max_value,
        parse_time_seconds: start.elapsed().as_secs_f64(),
    };

    info!(
        rows = metadata.rows_parsed,
        tuples = metadata.tuples_emitted,
        max = ?metadata.max_value,
        "analysed forecast bulletin"
    );

    Ok(AnalysisResult {
        header: table.header,
        rows: table.rows,
        ranked,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
