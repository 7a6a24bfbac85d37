//! Noun capitalization.

use serde_json::Value;
use sprach_core::enums::{FindingKind, PartOfSpeech};
use sprach_core::{AnnotatedSentence, AnnotatedToken, GrammarFinding};

use crate::messages;

/// Lowercase forms that are checked even when not tagged as nouns.
const ALWAYS_CHECKED: &[&str] = &["deutsch", "englisch"];

/// One finding per lowercase noun.
#[must_use]
pub fn check(sentence: &AnnotatedSentence) -> Vec<GrammarFinding> {
    sentence
        .iter()
        .filter(|t| must_be_capitalized(t) && starts_lowercase(&t.text))
        .map(|t| {
            GrammarFinding::new(FindingKind::Capitalization, messages::NOUN_CAPITALIZATION)
                .at(t.index)
                .with_details(Value::String(t.text.clone()))
        })
        .collect()
}

fn must_be_capitalized(token: &AnnotatedToken) -> bool {
    let noun = matches!(token.pos, PartOfSpeech::Noun | PartOfSpeech::Propn);
    (noun && !token.is_oov) || ALWAYS_CHECKED.contains(&token.text.as_str())
}

fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}
