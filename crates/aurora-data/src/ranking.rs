//! Ranking of forecast tuples by Kp value.

use std::cmp::Ordering;

use aurora_core::models::{LongTuple, RankedTuple};

/// Rank tuples by descending value and keep the first `n`.
///
/// Ties keep their input order, so the earlier tuple gets the lower rank.
/// Ranks run `1..=min(n, len)` without gaps. Empty input yields an empty list.
pub fn rank_top_n(tuples: Vec<LongTuple>, n: usize) -> Vec<RankedTuple> {
    let mut sorted = tuples;
    // `sort_by` is stable. Values are finite, so `partial_cmp` never returns
    // `None`; `-0.0` and `0.0` compare equal and keep input order.
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    sorted
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, entry)| RankedTuple { rank: i + 1, entry })
        .collect()
}
