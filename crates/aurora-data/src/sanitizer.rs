//! Removes parenthetical and bracketed annotations from the table text.
//!
//! Bulletins mark storm levels inline, e.g. `5.00 (G1)`. Either opening
//! delimiter may be closed by either closing delimiter, and the first closer
//! wins. Spans do not cross line breaks.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[(\[].*?[)\]]").expect("regex is valid"))
}

/// Strip every `(...)` / `[...]` span, delimiters included.
///
/// Returns the input unchanged (borrowed) when it holds no annotations.
pub fn strip_annotations(table: &str) -> Cow<'_, str> {
    annotation_re().replace_all(table, "")
}
