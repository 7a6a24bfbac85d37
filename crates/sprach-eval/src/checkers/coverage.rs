//! Meaning-coverage gate.
//!
//! Rejects answers that share too little with the target to be graded for
//! grammar at all.

use std::collections::HashSet;
use std::fmt;

use sprach_config::EvaluatorConfig;
use sprach_core::enums::{FindingKind, PartOfSpeech};
use sprach_core::{AnnotatedSentence, AnnotatedToken, GrammarFinding};

use super::helpers::{coverage_key, overlap, surplus, word_counts};
use crate::messages;

/// Why an answer was rejected by the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GateFailure {
    LowCoverage { coverage: f64 },
    TooManyExtraWords { extra: usize },
    MissingMainVerb,
    TooManyExtraContentWords { extra: usize },
    TooManyExtraModifiers { extra: usize },
}

impl fmt::Display for GateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowCoverage { coverage } => write!(f, "coverage {coverage:.2} below minimum"),
            Self::TooManyExtraWords { extra } => write!(f, "{extra} words not in target"),
            Self::MissingMainVerb => f.write_str("no main verb of the target is used"),
            Self::TooManyExtraContentWords { extra } => {
                write!(f, "{extra} extra nouns or verbs")
            }
            Self::TooManyExtraModifiers { extra } => {
                write!(f, "{extra} extra adjectives or adverbs")
            }
        }
    }
}

/// Run the gate. `None` means the answer may be graded.
#[must_use]
pub fn assess(
    user: &AnnotatedSentence,
    target: &AnnotatedSentence,
    config: &EvaluatorConfig,
) -> Option<GateFailure> {
    let basis = config.coverage_basis;
    let user_counts = word_counts(user, basis);
    let target_counts = word_counts(target, basis);

    let target_total: usize = target_counts.values().sum();
    if target_total == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let coverage = overlap(&user_counts, &target_counts) as f64 / target_total as f64;
    if coverage < config.min_coverage {
        return Some(GateFailure::LowCoverage { coverage });
    }

    let extra = surplus(&user_counts, &target_counts);
    if extra > config.max_extra {
        return Some(GateFailure::TooManyExtraWords { extra });
    }

    let target_verbs = main_verb_lemmas(target);
    if !target_verbs.is_empty() && target_verbs.is_disjoint(&main_verb_lemmas(user)) {
        return Some(GateFailure::MissingMainVerb);
    }

    let mut extra_core = 0;
    let mut extra_modifiers = 0;
    for token in user.iter().filter(|t| t.is_alpha) {
        if target_counts.contains_key(&coverage_key(token, basis)) {
            continue;
        }
        match token.pos {
            PartOfSpeech::Noun | PartOfSpeech::Verb | PartOfSpeech::Propn => extra_core += 1,
            PartOfSpeech::Adj | PartOfSpeech::Adv => extra_modifiers += 1,
            _ => {}
        }
    }

    if extra_core > config.max_core_extra {
        return Some(GateFailure::TooManyExtraContentWords { extra: extra_core });
    }
    if extra_modifiers > config.max_modifier_extra {
        return Some(GateFailure::TooManyExtraModifiers {
            extra: extra_modifiers,
        });
    }
    None
}

/// The single blocking finding returned for a rejected attempt.
#[must_use]
pub fn invalid_attempt() -> GrammarFinding {
    GrammarFinding::new(FindingKind::InvalidAttempt, messages::INVALID_ATTEMPT).blocking()
}

/// Lowercase lemmas of full verbs that are not attached as auxiliaries.
fn main_verb_lemmas(sentence: &AnnotatedSentence) -> HashSet<String> {
    sentence
        .iter()
        .filter(|t| t.pos == PartOfSpeech::Verb && !t.dep.is_auxiliary())
        .map(AnnotatedToken::lower_lemma)
        .collect()
}
