//! Encouragement for answers that are one word away from the target.

use sprach_core::enums::FindingKind;
use sprach_core::{AnnotatedSentence, GrammarFinding};

use super::helpers::alpha_words;
use crate::messages;

/// Positional substitutions plus the length difference of the alphabetic
/// word sequences.
#[must_use]
pub fn mismatch(user: &AnnotatedSentence, target: &AnnotatedSentence) -> usize {
    let user_words = alpha_words(user);
    let target_words = alpha_words(target);
    let substitutions = user_words
        .iter()
        .zip(&target_words)
        .filter(|(u, t)| u != t)
        .count();
    substitutions + user_words.len().abs_diff(target_words.len())
}

/// A sentence-level note when the answer is close but not identical.
#[must_use]
pub fn check(
    user: &AnnotatedSentence,
    target: &AnnotatedSentence,
    max_mismatch: usize,
) -> Vec<GrammarFinding> {
    let distance = mismatch(user, target);
    if distance == 0 || distance > max_mismatch {
        return Vec::new();
    }
    vec![GrammarFinding::new(FindingKind::NearMiss, messages::NEAR_MISS)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::flat;
    use rstest::rstest;

    fn words(text: &str) -> AnnotatedSentence {
        let pairs: Vec<(&str, &str)> = text.split(' ').map(|w| (w, "X")).collect();
        flat(&pairs)
    }

    #[rstest]
    #[case("ich gehe nach hause", 0)]
    #[case("ich laufe nach hause", 1)]
    #[case("ich gehe nach", 1)]
    #[case("ich laufe heim", 3)]
    #[case("Ich GEHE nach Hause", 0)]
    fn counts_mismatches(#[case] user: &str, #[case] expected: usize) {
        assert_eq!(mismatch(&words(user), &words("ich gehe nach hause")), expected);
    }

    #[test]
    fn one_substitution_earns_encouragement() {
        let findings = check(&words("ich laufe nach hause"), &words("ich gehe nach hause"), 1);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_sentence_level());
        assert_eq!(findings[0].priority, 5);
    }

    #[test]
    fn two_substitutions_earn_nothing() {
        let findings = check(&words("du laufe nach hause"), &words("ich gehe nach hause"), 1);
        assert!(findings.is_empty());
    }

    #[test]
    fn exact_match_earns_nothing() {
        let target = words("ich gehe nach hause");
        assert!(check(&target, &target, 1).is_empty());
    }
}
