//! Isolates the Kp breakdown table from the full bulletin text.
//!
//! The bulletin is loosely formatted, so the table is found purely by three
//! literal anchors searched in order:
//!
//! ```text
//! NOAA Kp index breakdown Aug 09-Aug 11 2025      <- start anchor ... year
//!
//!              Aug 09       Aug 10       Aug 11
//! 00-03UT       2.67         3.00         2.33    <- returned slice
//! ...
//! Rationale: ...                                   <- end anchor
//! ```
//!
//! Whatever sits between the start anchor and the first occurrence of the
//! year (the date range in the title line) is discarded without being
//! inspected.

use aurora_core::error::{Anchor, ForecastError, Result};
use tracing::debug;

/// Literal that introduces the Kp breakdown section.
pub const START_ANCHOR: &str = "NOAA Kp index breakdown";

/// Literal that follows the table body.
pub const END_ANCHOR: &str = "Rationale";

/// The three literals that bound the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAnchors {
    pub start: String,
    pub year: String,
    pub end: String,
}

impl TableAnchors {
    /// Standard bulletin anchors with `year` rendered as a 4-digit string.
    pub fn for_year(year: i32) -> Self {
        Self {
            start: START_ANCHOR.to_string(),
            year: format!("{:04}", year),
            end: END_ANCHOR.to_string(),
        }
    }
}

/// Return the text between the year marker (after the start anchor) and the
/// end anchor.
///
/// Each anchor is searched for only in the text following the previous one,
/// and only its first occurrence counts.
pub fn locate_table<'a>(document: &'a str, anchors: &TableAnchors) -> Result<&'a str> {
    let (_, after_start) = document
        .split_once(anchors.start.as_str())
        .ok_or(ForecastError::AnchorNotFound {
            anchor: Anchor::Start,
        })?;

    let (_, after_year) = after_start
        .split_once(anchors.year.as_str())
        .ok_or_else(|| ForecastError::AnchorNotFound {
            anchor: Anchor::Year(anchors.year.clone()),
        })?;

    let (table, _) = after_year
        .split_once(anchors.end.as_str())
        .ok_or(ForecastError::AnchorNotFound { anchor: Anchor::End })?;

    debug!(bytes = table.len(), "located forecast table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> TableAnchors {
        TableAnchors::for_year(2025)
    }

    #[test]
    fn test_for_year_pads_to_four_digits() {
        assert_eq!(TableAnchors::for_year(2025).year, "2025");
        assert_eq!(TableAnchors::for_year(987).year, "0987");
    }

    #[test]
    fn test_locate_returns_text_between_year_and_end() {
        let doc = "header\nNOAA Kp index breakdown Aug 09-Aug 11 2025\nTABLE\nRationale: quiet";
        let table = locate_table(doc, &anchors()).unwrap();
        assert_eq!(table, "\nTABLE\n");
    }

    #[test]
    fn test_locate_discards_text_before_year_marker() {
        let doc = "NOAA Kp index breakdown anything at all here 2025<table>Rationale";
        assert_eq!(locate_table(doc, &anchors()).unwrap(), "<table>");
    }

    #[test]
    fn test_locate_uses_first_occurrences() {
        let doc = "NOAA Kp index breakdown 2025 A 2025 B Rationale C Rationale";
        assert_eq!(locate_table(doc, &anchors()).unwrap(), " A 2025 B ");
    }

    #[test]
    fn test_locate_ignores_year_before_start_anchor() {
        // The year must follow the start anchor.
        let doc = "Issued 2025\nNOAA Kp index breakdown no year here\nRationale";
        let err = locate_table(doc, &anchors()).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::AnchorNotFound {
                anchor: Anchor::Year(ref y)
            } if y == "2025"
        ));
    }

    #[test]
    fn test_locate_missing_start_anchor() {
        let err = locate_table("2025 table Rationale", &anchors()).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::AnchorNotFound {
                anchor: Anchor::Start
            }
        ));
    }

    #[test]
    fn test_locate_missing_end_anchor() {
        let err = locate_table("NOAA Kp index breakdown 2025 table", &anchors()).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::AnchorNotFound { anchor: Anchor::End }
        ));
    }

    #[test]
    fn test_locate_end_anchor_before_year_is_not_used() {
        let doc = "NOAA Kp index breakdown Rationale 2025 table";
        let err = locate_table(doc, &anchors()).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::AnchorNotFound { anchor: Anchor::End }
        ));
    }
}
