use std::fmt;

use thiserror::Error;

/// Which anchor literal could not be found while locating the forecast table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// The literal that introduces the Kp breakdown section.
    Start,
    /// The four-digit year that closes the section's title line.
    Year(String),
    /// The literal that follows the table body.
    End,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Start => write!(f, "start anchor"),
            Anchor::Year(year) => write!(f, "year marker \"{}\"", year),
            Anchor::End => write!(f, "end anchor"),
        }
    }
}

/// All errors produced by the aurora forecast crates.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The bulletin did not contain one of the anchors that bound the table.
    #[error("Anchor not found in bulletin: {anchor}")]
    AnchorNotFound { anchor: Anchor },

    /// The header line carried no recognisable date columns.
    #[error("No date columns found in header line: {0:?}")]
    HeaderInference(String),

    /// The table body contained no usable data rows.
    #[error("Forecast table contains no usable data rows")]
    MalformedRow,

    /// A table cell could not be read as a Kp value.
    #[error("Non-numeric value {cell:?} at {time} on {date}")]
    NonNumericValue {
        time: String,
        date: String,
        cell: String,
    },

    /// The bulletin could not be retrieved.
    #[error("Failed to fetch bulletin: {0}")]
    Fetch(String),

    /// The notification collaborator rejected or failed to deliver a payload.
    #[error("Failed to deliver notification: {0}")]
    Notify(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the aurora crates.
pub type Result<T> = std::result::Result<T, ForecastError>;
