//! String similarity for verb-lemma comparison.

use similar::TextDiff;

/// Longest-matching-block ratio `2 * matches / (len(a) + len(b))` over
/// characters, in `0.0..=1.0`.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    f64::from(TextDiff::from_chars(a, b).ratio())
}
