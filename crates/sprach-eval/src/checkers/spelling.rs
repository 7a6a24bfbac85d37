//! Spelling and criticality.
//!
//! A misspelling is only reported when the dictionary's correction is a word
//! of the target sentence. Unknown verbs that yield no such correction are
//! compared against the target's verb lemmas instead.

use std::collections::HashSet;

use serde_json::json;
use sprach_core::enums::FindingKind;
use sprach_core::{AnnotatedSentence, AnnotatedToken, Dictionary, GrammarFinding};

use super::helpers::vocabulary;
use crate::{messages, similarity};

/// Spelling findings plus whether any of them hit a syntactic anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellingReport {
    pub findings: Vec<GrammarFinding>,
    /// A subject, root, clausal object or finite verb is misspelled.
    pub critical: bool,
}

#[must_use]
pub fn check<D: Dictionary + ?Sized>(
    user: &AnnotatedSentence,
    target: &AnnotatedSentence,
    dictionary: &D,
    verb_similarity_threshold: f64,
) -> SpellingReport {
    let target_words = vocabulary(target);
    let target_verbs: HashSet<String> = target
        .iter()
        .filter(|t| t.pos.is_verbal())
        .map(AnnotatedToken::lower_lemma)
        .collect();

    let mut report = SpellingReport::default();
    for token in user.iter().filter(|t| t.is_alpha && t.pos.is_content()) {
        let lower = token.lower();
        if !dictionary.is_unknown(&lower) {
            continue;
        }

        let finding = match dictionary.suggest_correction(&lower) {
            Some(suggestion) if target_words.contains(&suggestion.to_lowercase()) => Some(
                GrammarFinding::new(
                    FindingKind::Spelling,
                    messages::possible_misspelling(token, &suggestion),
                )
                .at(token.index)
                .with_details(json!({ "token": token.text, "suggestion": suggestion })),
            ),
            _ if token.pos.is_verbal()
                && is_unlike_every_verb(token, &target_verbs, verb_similarity_threshold) =>
            {
                Some(
                    GrammarFinding::new(
                        FindingKind::Spelling,
                        messages::crucial_verb_misspelling(token),
                    )
                    .at(token.index)
                    .blocking(),
                )
            }
            _ => None,
        };

        if let Some(finding) = finding {
            report.critical |= is_critical(token);
            report.findings.push(finding);
        }
    }
    report
}

/// Syntactic anchors whose misspelling makes further grading meaningless.
fn is_critical(token: &AnnotatedToken) -> bool {
    token.dep.is_anchor() || token.morph.is_finite()
}

fn is_unlike_every_verb(token: &AnnotatedToken, target_verbs: &HashSet<String>, threshold: f64) -> bool {
    if target_verbs.is_empty() {
        return false;
    }
    let lemma = token.lower_lemma();
    target_verbs
        .iter()
        .all(|verb| similarity::ratio(&lemma, verb) < threshold)
}
