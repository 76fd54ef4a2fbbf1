//! Wide-to-long reshaping of the forecast table.

use aurora_core::error::{ForecastError, Result};
use aurora_core::models::{LongTuple, WideTable};
use tracing::debug;

/// Melt the wide table into `(time, date, value)` tuples.
///
/// Tuples are emitted column by column (all rows of the first date, then all
/// rows of the next), which fixes the encounter order used for tie-breaking
/// downstream. Missing cells are skipped; any other cell must read as a
/// finite number.
pub fn melt(table: &WideTable) -> Result<Vec<LongTuple>> {
    let mut tuples = Vec::with_capacity(table.rows.len() * table.header.date_count());

    for (col, date) in table.header.dates().iter().enumerate() {
        for row in &table.rows {
            let Some(cell) = row.cells.get(col).and_then(Option::as_deref) else {
                continue;
            };
            tuples.push(LongTuple {
                time: row.time.clone(),
                date: date.clone(),
                value: coerce(cell, &row.time, date)?,
            });
        }
    }

    debug!(tuples = tuples.len(), "melted table to long form");
    Ok(tuples)
}

fn coerce(cell: &str, time: &str, date: &str) -> Result<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ForecastError::NonNumericValue {
            time: time.to_string(),
            date: date.to_string(),
            cell: cell.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::models::{HeaderRow, WideRow};

    fn table(dates: &[&str], rows: &[(&str, &[Option<&str>])]) -> WideTable {
        WideTable {
            header: HeaderRow::from_dates(dates.iter().copied()),
            rows: rows
                .iter()
                .map(|(time, cells)| WideRow {
                    time: time.to_string(),
                    cells: cells.iter().map(|c| c.map(str::to_string)).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_melt_column_major_order() {
        let wide = table(
            &["Aug 9", "Aug 10"],
            &[
                ("00-03UT", &[Some("3"), Some("2")]),
                ("03-06UT", &[Some("6"), Some("4")]),
            ],
        );
        let long = melt(&wide).unwrap();

        let seen: Vec<(&str, &str, f64)> = long
            .iter()
            .map(|t| (t.time.as_str(), t.date.as_str(), t.value))
            .collect();
        assert_eq!(
            seen,
            vec![
                ("00-03UT", "Aug 9", 3.0),
                ("03-06UT", "Aug 9", 6.0),
                ("00-03UT", "Aug 10", 2.0),
                ("03-06UT", "Aug 10", 4.0),
            ]
        );
    }

    #[test]
    fn test_melt_skips_missing_cells() {
        let wide = table(
            &["Aug 9", "Aug 10"],
            &[("00-03UT", &[Some("3"), None]), ("03-06UT", &[None, Some("4")])],
        );
        let long = melt(&wide).unwrap();
        assert_eq!(long.len(), 2);
        assert_eq!(long[0].date, "Aug 9");
        assert_eq!(long[1].date, "Aug 10");
    }

    #[test]
    fn test_melt_parses_fractional_values() {
        let wide = table(&["Aug 9"], &[("00-03UT", &[Some("2.67")])]);
        let long = melt(&wide).unwrap();
        assert!((long[0].value - 2.67).abs() < 1e-12);
    }

    #[test]
    fn test_melt_non_numeric_names_cell() {
        let wide = table(&["Aug 9", "Aug 10"], &[("00-03UT", &[Some("3"), Some("G1")])]);
        match melt(&wide).unwrap_err() {
            ForecastError::NonNumericValue { time, date, cell } => {
                assert_eq!(time, "00-03UT");
                assert_eq!(date, "Aug 10");
                assert_eq!(cell, "G1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_melt_rejects_infinite_values() {
        let wide = table(&["Aug 9"], &[("00-03UT", &[Some("inf")])]);
        assert!(matches!(
            melt(&wide),
            Err(ForecastError::NonNumericValue { .. })
        ));
    }
}
