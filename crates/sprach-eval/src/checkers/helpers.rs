//! Token views shared by several checkers.

use std::collections::{HashMap, HashSet};

use sprach_config::CoverageBasis;
use sprach_core::{AnnotatedSentence, AnnotatedToken};

/// Lowercase surface forms of the alphabetic tokens, in order.
pub fn alpha_words(sentence: &AnnotatedSentence) -> Vec<String> {
    sentence
        .iter()
        .filter(|t| t.is_alpha)
        .map(AnnotatedToken::lower)
        .collect()
}

/// Set of lowercase alphabetic surface forms.
pub fn vocabulary(sentence: &AnnotatedSentence) -> HashSet<String> {
    sentence
        .iter()
        .filter(|t| t.is_alpha)
        .map(AnnotatedToken::lower)
        .collect()
}

/// Comparison key of a token under the given coverage basis.
pub fn coverage_key(token: &AnnotatedToken, basis: CoverageBasis) -> String {
    match basis {
        CoverageBasis::Surface => token.lower(),
        CoverageBasis::Lemma => token.lower_lemma(),
    }
}

/// Multiset of coverage keys over alphabetic tokens.
pub fn word_counts(sentence: &AnnotatedSentence, basis: CoverageBasis) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in sentence.iter().filter(|t| t.is_alpha) {
        *counts.entry(coverage_key(token, basis)).or_insert(0) += 1;
    }
    counts
}

/// Size of the multiset intersection.
pub fn overlap(left: &HashMap<String, usize>, right: &HashMap<String, usize>) -> usize {
    left.iter()
        .map(|(word, &n)| n.min(right.get(word).copied().unwrap_or(0)))
        .sum()
}

/// Size of the multiset difference `left - right`.
pub fn surplus(left: &HashMap<String, usize>, right: &HashMap<String, usize>) -> usize {
    left.iter()
        .map(|(word, &n)| n.saturating_sub(right.get(word).copied().unwrap_or(0)))
        .sum()
}
