//! Conflict resolution and ranking.
//!
//! Findings claim their tokens in priority order, earliest first on ties. A
//! finding survives only if every token it covers is still unclaimed; a
//! finding that is dropped claims nothing, so lower-priority findings on its
//! other tokens can still win them. Sentence-level findings are always kept.

use std::cmp::Reverse;
use std::collections::HashSet;

use sprach_core::{GrammarFinding, MAX_FINDINGS};

/// Deduplicate by span, sort by priority (descending) then first span
/// (ascending, sentence-level last), and cap at [`MAX_FINDINGS`].
#[must_use]
pub fn resolve(findings: Vec<GrammarFinding>) -> Vec<GrammarFinding> {
    let mut ranked: Vec<(usize, GrammarFinding)> = findings.into_iter().enumerate().collect();
    ranked.sort_by_key(|(position, finding)| (Reverse(finding.priority), *position));

    let mut claimed: HashSet<usize> = HashSet::new();
    let mut resolved: Vec<GrammarFinding> = ranked
        .into_iter()
        .filter(|(_, finding)| {
            let spans = finding.spans.as_deref().unwrap_or_default();
            if spans.iter().any(|span| claimed.contains(span)) {
                return false;
            }
            claimed.extend(spans);
            true
        })
        .map(|(_, finding)| finding)
        .collect();

    resolved.sort_by_key(|f| (Reverse(f.priority), f.first_span().unwrap_or(usize::MAX)));
    resolved.truncate(MAX_FINDINGS);
    resolved
}
