//! The fixed markup tag pair tracked by the div counter.

/// Substring counted as an opening tag. Matches `<div>`, `<div className=...>` and
/// also prefixes such as `<divider`, since no tokenization is performed.
pub const OPEN_TAG: &str = "<div";

/// Substring counted as a closing tag.
pub const CLOSE_TAG: &str = "</div>";

/// Count non-overlapping occurrences of the opening and closing markers in `line`.
///
/// Both searches scan the whole line independently of each other.
#[must_use]
pub fn count_tags(line: &str) -> (usize, usize) {
    (line.matches(OPEN_TAG).count(), line.matches(CLOSE_TAG).count())
}
