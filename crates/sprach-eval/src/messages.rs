//! Learner-facing message texts.

use sprach_core::AnnotatedToken;

pub const INVALID_ATTEMPT: &str = "Your sentence does not match the target meaning.";

pub const NOUN_CAPITALIZATION: &str = "In German, nouns must be capitalized.";

pub const MAIN_CLAUSE_V2: &str =
    "In German main clauses, the conjugated verb must appear in the second position.";

pub const SUBORDINATE_VERB_FINAL: &str = "This sentence has a subordinate clause, so the \
    conjugated verb must appear at the end. Your word order is incorrect.";

pub const PERFEKT_NEEDS_SEIN: &str = "This verb forms the Perfekt with 'sein', but you used 'haben'.";

pub const PERFEKT_NEEDS_HABEN: &str =
    "This verb forms the Perfekt with 'haben', but you used 'sein'.";

pub const NEAR_MISS: &str = "Very close! You are a few words off.";

#[must_use]
pub fn possible_misspelling(token: &AnnotatedToken, suggestion: &str) -> String {
    format!("'{}' may be misspelled. Did you mean '{suggestion}'?", token.text)
}

#[must_use]
pub fn crucial_verb_misspelling(token: &AnnotatedToken) -> String {
    format!(
        "'{}' looks like a misspelling of a crucial verb for grammar evaluation.",
        token.text
    )
}

#[must_use]
pub fn wrong_case(user: &AnnotatedToken, target: &AnnotatedToken) -> String {
    format!(
        "You used '{}', but this verb or preposition requires the {} case. \
         The correct form is '{}'.",
        user.text,
        case_names(target.morph.case()),
        target.text
    )
}

#[must_use]
pub fn extra_word(token: &AnnotatedToken) -> String {
    format!("Extra word '{}' not in target sentence", token.text)
}

/// Human-readable names for `Case` feature values.
fn case_names(values: &[String]) -> String {
    if values.is_empty() {
        return "appropriate".to_string();
    }
    values
        .iter()
        .map(|value| match value.as_str() {
            "Nom" => "nominative",
            "Acc" => "accusative",
            "Dat" => "dative",
            "Gen" => "genitive",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" or ")
}
