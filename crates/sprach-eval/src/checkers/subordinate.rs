//! Verb-final position in subordinate clauses.

use sprach_core::enums::{FindingKind, PartOfSpeech};
use sprach_core::{AnnotatedSentence, GrammarFinding};

use crate::messages;

#[must_use]
pub fn check(sentence: &AnnotatedSentence) -> Vec<GrammarFinding> {
    violation(sentence)
        .map(|verb| {
            GrammarFinding::new(
                FindingKind::SubordinateVerbPosition,
                messages::SUBORDINATE_VERB_FINAL,
            )
            .at(verb)
        })
        .into_iter()
        .collect()
}

/// The clause head is the last verb in the first sentence that governs a
/// subordinating conjunction. It must close its own subtree.
fn violation(sentence: &AnnotatedSentence) -> Option<usize> {
    let verb = sentence
        .first_sentence()
        .iter()
        .rev()
        .find(|t| {
            t.pos.is_verbal() && sentence.children(t).any(|c| c.pos == PartOfSpeech::Sconj)
        })?;

    (verb.subtree.last() != Some(&verb.index)).then_some(verb.index)
}
