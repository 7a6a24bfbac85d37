//! Verb-second position in main clauses.

use sprach_core::enums::{DependencyLabel, FindingKind, PartOfSpeech};
use sprach_core::{AnnotatedSentence, AnnotatedToken, GrammarFinding};

use crate::messages;

/// Words tolerated inside a fronted subject phrase.
const SUBJECT_PHRASE_MODIFIERS: &[&str] = &["nur", "sehr", "mit"];

#[must_use]
pub fn check(sentence: &AnnotatedSentence) -> Vec<GrammarFinding> {
    violation(sentence)
        .map(|verb| {
            GrammarFinding::new(FindingKind::MainClauseVerbPosition, messages::MAIN_CLAUSE_V2)
                .at(verb)
        })
        .into_iter()
        .collect()
}

/// Index of the misplaced finite verb, if the first clause breaks V2.
///
/// Only fires when the subject itself is fronted and something other than
/// the subject phrase also stands before the verb.
fn violation(sentence: &AnnotatedSentence) -> Option<usize> {
    let clause = sentence.first_sentence();
    let verb = clause.iter().find(|t| t.is_finite_verb())?;

    let prefield: Vec<&AnnotatedToken> = clause
        .iter()
        .take_while(|t| t.index < verb.index)
        .filter(|t| !t.is_punct)
        .collect();
    if prefield.is_empty() {
        return None;
    }

    let subject = sentence
        .children(verb)
        .find(|t| t.dep == DependencyLabel::Subject)?;
    if !prefield.iter().any(|t| t.index == subject.index) {
        return None;
    }

    prefield
        .iter()
        .any(|t| !in_subject_phrase(t))
        .then_some(verb.index)
}

fn in_subject_phrase(token: &AnnotatedToken) -> bool {
    matches!(token.dep, DependencyLabel::NounKernel | DependencyLabel::Subject)
        || matches!(token.pos, PartOfSpeech::Det | PartOfSpeech::Noun)
        || SUBJECT_PHRASE_MODIFIERS.contains(&token.lower().as_str())
}
