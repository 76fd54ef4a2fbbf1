use serde::{Deserialize, Serialize};

/// Label of the first header column; it names the time-of-day slot.
pub const TIME_LABEL: &str = "time";

/// Ordered column labels of the forecast table.
///
/// The first label is always [`TIME_LABEL`]; every following label is a
/// date token such as `Aug 9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHeaderRow")]
pub struct HeaderRow {
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct RawHeaderRow {
    labels: Vec<String>,
}

impl TryFrom<RawHeaderRow> for HeaderRow {
    type Error = String;

    fn try_from(raw: RawHeaderRow) -> Result<Self, Self::Error> {
        match raw.labels.first() {
            Some(first) if first == TIME_LABEL => Ok(Self { labels: raw.labels }),
            Some(first) => Err(format!(
                "header must start with `{TIME_LABEL}`, found `{first}`"
            )),
            None => Err(format!("header must start with `{TIME_LABEL}`, found no labels")),
        }
    }
}

impl HeaderRow {
    /// Build a header from date labels, prepending the `time` column.
    pub fn from_dates<I, S>(dates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels = vec![TIME_LABEL.to_string()];
        labels.extend(dates.into_iter().map(Into::into));
        Self { labels }
    }

    /// All labels, `time` first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Date labels only, in column order.
    pub fn dates(&self) -> &[String] {
        &self.labels[1..]
    }

    /// Number of date columns.
    pub fn date_count(&self) -> usize {
        self.labels.len() - 1
    }

    /// Return a header keeping only the date columns whose index is in `keep`.
    pub fn retain_dates(&self, keep: &[usize]) -> Self {
        Self::from_dates(keep.iter().filter_map(|&i| self.dates().get(i).cloned()))
    }
}

/// One row of the wide table: a time slot and one raw cell per date column.
///
/// `None` marks a missing cell (padding or an explicit NA marker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideRow {
    pub time: String,
    pub cells: Vec<Option<String>>,
}

impl WideRow {
    /// `true` when every date cell is missing.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// The parsed forecast table: header plus rows with one cell per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideTable {
    pub header: HeaderRow,
    pub rows: Vec<WideRow>,
}

/// A single `(time, date, value)` observation from the melted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTuple {
    pub time: String,
    pub date: String,
    pub value: f64,
}

/// A [`LongTuple`] with its 1-based position in descending-value order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTuple {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LongTuple,
}

impl RankedTuple {
    pub fn time(&self) -> &str {
        &self.entry.time
    }

    pub fn date(&self) -> &str {
        &self.entry.date
    }

    pub fn value(&self) -> f64 {
        self.entry.value
    }
}
