//! Whitespace-table parsing into the wide [`WideTable`] form.

use aurora_core::error::{ForecastError, Result};
use aurora_core::models::{HeaderRow, WideRow, WideTable};
use tracing::{debug, warn};

/// Cell spellings treated as a missing value.
///
/// Cells are whitespace-split, so multi-word spellings such as `#N/A N/A`
/// can never occur and are not listed.
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>", "N/A",
    "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Split the sanitized table into its header line and the body after it.
///
/// Blank lines are skipped, so the header is the first line holding any
/// non-whitespace. Returns `None` when the text is entirely blank.
pub fn split_header_line(table: &str) -> Option<(&str, &str)> {
    let mut rest = table;
    loop {
        let (line, tail) = match rest.split_once('\n') {
            Some((line, tail)) => (line, tail),
            None => (rest, ""),
        };
        if !line.trim().is_empty() {
            return Some((line, tail));
        }
        if tail.is_empty() {
            return None;
        }
        rest = tail;
    }
}

/// Parse the table body against `header`.
///
/// Each non-blank line becomes a row: the first whitespace-separated cell is
/// the time label and the remaining cells map positionally onto the header's
/// date columns. Short rows are padded with missing cells; cells past the last
/// date column are discarded. Date columns missing in every row are removed
/// from both the header and the rows, then rows with no values left are
/// dropped.
///
/// Fails with [`ForecastError::MalformedRow`] when no row survives.
pub fn parse_rows(body: &str, header: &HeaderRow) -> Result<WideTable> {
    let width = header.date_count();
    let mut rows = Vec::new();

    for line in body.lines() {
        let mut cells = line.split_whitespace();
        let Some(time) = cells.next() else {
            continue;
        };

        let mut values: Vec<Option<String>> = cells.map(parse_cell).collect();
        if values.len() > width {
            warn!(
                time,
                extra = values.len() - width,
                "discarding cells beyond the last header column"
            );
            values.truncate(width);
        }
        values.resize(width, None);

        rows.push(WideRow {
            time: time.to_string(),
            cells: values,
        });
    }

    let keep: Vec<usize> = (0..width)
        .filter(|&col| rows.iter().any(|row| row.cells[col].is_some()))
        .collect();

    let header = if keep.len() < width {
        debug!(
            dropped = width - keep.len(),
            "dropping date columns with no values"
        );
        for row in rows.iter_mut() {
            row.cells = keep.iter().map(|&col| row.cells[col].take()).collect();
        }
        header.retain_dates(&keep)
    } else {
        header.clone()
    };

    rows.retain(|row| !row.is_empty());
    if rows.is_empty() {
        return Err(ForecastError::MalformedRow);
    }

    debug!(rows = rows.len(), columns = header.date_count(), "parsed wide table");
    Ok(WideTable { header, rows })
}

fn parse_cell(cell: &str) -> Option<String> {
    if MISSING_MARKERS.contains(&cell) {
        None
    } else {
        Some(cell.to_string())
    }
}
