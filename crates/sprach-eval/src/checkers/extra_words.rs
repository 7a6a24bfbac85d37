//! Words of the answer that the target does not contain.

use std::collections::HashSet;

use sprach_core::enums::FindingKind;
use sprach_core::{AnnotatedSentence, GrammarFinding};

use super::helpers::vocabulary;
use crate::messages;

/// Tokens already anchoring an earlier finding are skipped so a word is not
/// reported twice.
#[must_use]
pub fn check(
    user: &AnnotatedSentence,
    target: &AnnotatedSentence,
    claimed: &HashSet<usize>,
) -> Vec<GrammarFinding> {
    let target_words = vocabulary(target);
    user.iter()
        .filter(|t| t.is_alpha && !claimed.contains(&t.index))
        .filter(|t| !target_words.contains(&t.lower()))
        .map(|t| GrammarFinding::new(FindingKind::ExtraWord, messages::extra_word(t)).at(t.index))
        .collect()
}

/// Every token index referenced by a finding.
#[must_use]
pub fn claimed_spans(findings: &[GrammarFinding]) -> HashSet<usize> {
    findings
        .iter()
        .filter_map(|f| f.spans.as_deref())
        .flatten()
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{flat, ich_gehe_nach_hause};
    use pretty_assertions::assert_eq;

    #[test]
    fn foreign_word_is_reported() {
        let user = flat(&[("Ich", "PRON"), ("gehe", "VERB"), ("heute", "ADV"), ("nach", "ADP"), ("Hause", "NOUN")]);
        let findings = check(&user, &ich_gehe_nach_hause(), &HashSet::new());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].spans, Some(vec![2]));
        assert_eq!(findings[0].message, "Extra word 'heute' not in target sentence");
        assert_eq!(findings[0].priority, 90);
    }

    #[test]
    fn comparison_ignores_case() {
        let user = flat(&[("ich", "PRON"), ("GEHE", "VERB")]);
        assert!(check(&user, &ich_gehe_nach_hause(), &HashSet::new()).is_empty());
    }

    #[test]
    fn claimed_tokens_are_skipped() {
        let user = flat(&[("Ich", "PRON"), ("gehhe", "VERB")]);
        let claimed = HashSet::from([1]);
        assert!(check(&user, &ich_gehe_nach_hause(), &claimed).is_empty());
    }

    #[test]
    fn claimed_spans_collects_all_indices() {
        let findings = vec![
            GrammarFinding::new(FindingKind::Spelling, "a").at(1),
            GrammarFinding::new(FindingKind::NearMiss, "b"),
            GrammarFinding::new(FindingKind::Capitalization, "c").at(4),
        ];
        assert_eq!(claimed_spans(&findings), HashSet::from([1, 4]));
    }
}
