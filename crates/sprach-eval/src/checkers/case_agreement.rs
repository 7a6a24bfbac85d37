//! Case agreement of determiners and pronouns.
//!
//! Pairs user and target determiners/pronouns by order of occurrence, not by
//! syntactic alignment. With differing counts the zip truncates to the
//! shorter side and may pair unrelated tokens.

use std::collections::HashMap;

use serde_json::json;
use sprach_core::enums::{FindingKind, PartOfSpeech};
use sprach_core::{AnnotatedSentence, AnnotatedToken, GrammarFinding};

use crate::messages;

type Signature<'a> = (&'a str, &'a PartOfSpeech, &'a [String]);

#[must_use]
pub fn check(user: &AnnotatedSentence, target: &AnnotatedSentence) -> Vec<GrammarFinding> {
    let user_tokens = determiners(user);
    let target_tokens = determiners(target);

    if signatures(&user_tokens) == signatures(&target_tokens) {
        return Vec::new();
    }

    user_tokens
        .iter()
        .zip(&target_tokens)
        .filter(|(u, t)| u.morph.pron_type() == t.morph.pron_type())
        .filter(|(u, t)| u.morph.case() != t.morph.case())
        .map(|(u, t)| {
            GrammarFinding::new(FindingKind::CaseAgreement, messages::wrong_case(u, t))
                .at(u.index)
                .with_details(json!({
                    "user_pronoun": u.text,
                    "target_pronoun": t.text,
                    "user_case": u.morph.case().join(","),
                    "target_case": t.morph.case().join(","),
                }))
        })
        .collect()
}

fn determiners(sentence: &AnnotatedSentence) -> Vec<&AnnotatedToken> {
    sentence
        .iter()
        .filter(|t| t.pos.is_determiner_like())
        .collect()
}

fn signatures<'a>(tokens: &[&'a AnnotatedToken]) -> HashMap<Signature<'a>, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts
            .entry((token.lemma.as_str(), &token.pos, token.morph.case()))
            .or_insert(0) += 1;
    }
    counts
}
