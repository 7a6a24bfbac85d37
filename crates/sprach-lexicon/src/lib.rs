//! # sprach-lexicon
//!
//! Frequency-list spelling dictionary.
//!
//! A word is known when it appears in the list. Corrections are generated by
//! single-character edits (deletion, transposition, substitution, insertion)
//! over the German alphabet: known candidates at distance 1 first, then at
//! distance 2; the most frequent candidate wins, alphabetical on ties.
//!
//! Word lists are either a JSON object `{"word": count, ...}` or plain text
//! with one `word [count]` entry per line (`#` starts a comment line).

mod error;

pub use error::LexiconError;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use sprach_core::Dictionary;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzäöüß";

/// Longest word for which distance-2 corrections are searched.
pub const MAX_DISTANCE_TWO_CHARS: usize = 24;

const BUILTIN_WORDS: &str = include_str!("../data/de_common.txt");

/// Known German words with their relative frequencies.
#[derive(Debug, Clone)]
pub struct FrequencyDictionary {
    counts: HashMap<String, u64>,
    max_edit_distance: u8,
}

impl FrequencyDictionary {
    /// The small built-in list of common German words.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::EditDistance` for a distance other than 1 or 2.
    pub fn builtin(max_edit_distance: u8) -> Result<Self, LexiconError> {
        Self::from_counts(parse_lines(BUILTIN_WORDS)?, max_edit_distance)
    }

    /// Load a word list from disk, detecting JSON by a leading `{`.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError` when the file cannot be read or parsed, holds no
    /// words, or the edit distance is out of range.
    pub fn from_path(path: &Path, max_edit_distance: u8) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let counts = if text.trim_start().starts_with('{') {
            serde_json::from_str::<HashMap<String, u64>>(&text)?
        } else {
            parse_lines(&text)?
        };
        let dictionary = Self::from_counts(counts, max_edit_distance)?;
        tracing::info!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded word list"
        );
        Ok(dictionary)
    }

    /// # Errors
    ///
    /// Returns `LexiconError::Empty` for an empty map and
    /// `LexiconError::EditDistance` for a distance other than 1 or 2.
    pub fn from_counts(
        counts: impl IntoIterator<Item = (String, u64)>,
        max_edit_distance: u8,
    ) -> Result<Self, LexiconError> {
        if !matches!(max_edit_distance, 1 | 2) {
            return Err(LexiconError::EditDistance(max_edit_distance));
        }
        let mut merged: HashMap<String, u64> = HashMap::new();
        for (word, count) in counts {
            *merged.entry(word.to_lowercase()).or_insert(0) += count;
        }
        if merged.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self {
            counts: merged,
            max_edit_distance,
        })
    }

    /// Add words with a count of one unless already known.
    pub fn extend_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.counts.entry(word.to_lowercase()).or_insert(1);
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    #[must_use]
    pub fn frequency(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Best known word within the configured edit distance.
    ///
    /// Distance-1 candidates are generated; distance-2 candidates are found by
    /// scanning known words of similar length with a bounded edit distance, and
    /// only for words of at most [`MAX_DISTANCE_TWO_CHARS`] characters.
    #[must_use]
    pub fn correction(&self, word: &str) -> Option<String> {
        if self.contains(word) {
            return Some(word.to_string());
        }
        let first = edits1(word);
        if let Some(best) = self.most_frequent(first.iter()) {
            return Some(best);
        }
        let chars: Vec<char> = word.chars().collect();
        if self.max_edit_distance < 2 || chars.len() > MAX_DISTANCE_TWO_CHARS {
            return None;
        }
        self.most_frequent(
            self.counts
                .keys()
                .filter(|known| within_two_edits(&chars, known)),
        )
    }

    fn most_frequent<'a>(&self, candidates: impl Iterator<Item = &'a String>) -> Option<String> {
        candidates
            .filter_map(|w| self.counts.get(w).map(|&count| (count, w)))
            .max_by(|(ca, wa), (cb, wb)| ca.cmp(cb).then_with(|| wb.cmp(wa)))
            .map(|(_, w)| w.clone())
    }
}

impl Dictionary for FrequencyDictionary {
    fn is_unknown(&self, word: &str) -> bool {
        !self.contains(word)
    }

    fn suggest_correction(&self, word: &str) -> Option<String> {
        self.correction(word)
    }
}

/// Parse `word [count]` lines. Blank lines and `#` comments are skipped.
fn parse_lines(text: &str) -> Result<HashMap<String, u64>, LexiconError> {
    let mut counts = HashMap::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let count = match fields.next() {
            None => 1,
            Some(raw) => raw.parse::<u64>().map_err(|e| LexiconError::Parse {
                line: number + 1,
                reason: format!("invalid count '{raw}': {e}"),
            })?,
        };
        if fields.next().is_some() {
            return Err(LexiconError::Parse {
                line: number + 1,
                reason: "expected 'word [count]'".to_string(),
            });
        }
        *counts.entry(word.to_string()).or_insert(0) += count;
    }
    Ok(counts)
}

/// All strings one edit away from `word`.
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = HashSet::new();
    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);
        if let Some((_, rest)) = right.split_first() {
            edits.insert(left.iter().chain(rest).collect());
        }
        if right.len() > 1 {
            let mut swapped: Vec<char> = left.to_vec();
            swapped.extend([right[1], right[0]]);
            swapped.extend(&right[2..]);
            edits.insert(swapped.into_iter().collect());
        }
        for c in ALPHABET.chars() {
            if let Some((_, rest)) = right.split_first() {
                edits.insert(left.iter().chain([c].iter()).chain(rest).collect());
            }
            edits.insert(left.iter().chain([c].iter()).chain(right).collect());
        }
    }
    edits
}

/// Optimal string alignment distance of at most two: deletions, insertions,
/// substitutions and adjacent transpositions.
fn within_two_edits(word: &[char], candidate: &str) -> bool {
    const LIMIT: usize = 2;
    let other: Vec<char> = candidate.chars().collect();
    if word.len().abs_diff(other.len()) > LIMIT {
        return false;
    }

    let width = other.len() + 1;
    let mut before: Vec<usize> = Vec::new();
    let mut previous: Vec<usize> = (0..width).collect();
    for i in 1..=word.len() {
        let mut current = vec![i; width];
        for j in 1..width {
            let cost = usize::from(word[i - 1] != other[j - 1]);
            let mut best = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
            if i > 1 && j > 1 && word[i - 1] == other[j - 2] && word[i - 2] == other[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            current[j] = best;
        }
        if current.iter().all(|&d| d > LIMIT) {
            return false;
        }
        before = std::mem::replace(&mut previous, current);
    }
    previous[width - 1] <= LIMIT
}
