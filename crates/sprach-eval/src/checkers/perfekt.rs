//! Perfekt auxiliary choice (sein vs haben).

use serde_json::Value;
use sprach_core::enums::FindingKind;
use sprach_core::{AnnotatedSentence, GrammarFinding};

use crate::messages;

/// Verbs forming the Perfekt with "sein": motion, change of state, and a few
/// fixed exceptions.
pub const SEIN_VERBS: &[&str] = &[
    "sein",
    "werden",
    "bleiben",
    "sterben",
    "passieren",
    "geschehen",
    "gelingen",
    "misslingen",
    "wachsen",
    "verschwinden",
    "gehen",
    "kommen",
    "fahren",
    "laufen",
    "fliegen",
    "reisen",
    "rennen",
    "steigen",
    "fallen",
    "ziehen",
    "wandern",
    "aufstehen",
    "hinsetzen",
    "ankommen",
    "abfahren",
    "aussteigen",
    "einsteigen",
    "zurückkommen",
    "mitkommen",
    "weggehen",
    "einschlafen",
    "aufwachen",
    "erwachen",
    "altern",
    "verwelken",
];

const PARTICIPLE_TAGS: &[&str] = &["VVPP", "VAPP"];
const FINITE_AUXILIARY_TAG: &str = "VAFIN";

/// Which auxiliary the participle actually requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliaryError {
    /// Needs "sein", got something else.
    Sein,
    /// Needs "haben", got something else.
    Haben,
}

impl AuxiliaryError {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sein => "SEIN_ERROR",
            Self::Haben => "HABEN_ERROR",
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::Sein => messages::PERFEKT_NEEDS_SEIN,
            Self::Haben => messages::PERFEKT_NEEDS_HABEN,
        }
    }
}

/// At most one finding, anchored at the finite auxiliary.
#[must_use]
pub fn check(sentence: &AnnotatedSentence) -> Vec<GrammarFinding> {
    let mut participle = None;
    let mut auxiliary = None;
    for token in sentence {
        if PARTICIPLE_TAGS.contains(&token.tag.as_str()) {
            participle = Some(token.lemma.as_str());
        }
        if token.tag == FINITE_AUXILIARY_TAG {
            auxiliary = Some((token.lemma.as_str(), token.index));
        }
    }

    let (Some(participle), Some((auxiliary, index))) = (participle, auxiliary) else {
        return Vec::new();
    };

    let error = if SEIN_VERBS.contains(&participle) {
        (auxiliary != "sein").then_some(AuxiliaryError::Sein)
    } else {
        (auxiliary != "haben").then_some(AuxiliaryError::Haben)
    };

    error
        .map(|error| {
            GrammarFinding::new(FindingKind::PerfektAuxiliary, error.message())
                .at(index)
                .with_details(Value::String(error.code().to_string()))
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sprach_core::{SentenceBuilder, TokenSpec};

    /// Ich {aux} nach Hause {participle} .
    fn perfekt(aux_lemma: &str, participle_lemma: &str) -> AnnotatedSentence {
        SentenceBuilder::new()
            .push(TokenSpec::new("Ich", "PRON").dep("sb").head(1))
            .push(TokenSpec::new("aux", "AUX").lemma(aux_lemma).tag("VAFIN").dep("ROOT").feats("VerbForm=Fin"))
            .push(TokenSpec::new("nach", "ADP").head(4))
            .push(TokenSpec::new("Hause", "NOUN").head(2))
            .push(TokenSpec::new("participle", "VERB").lemma(participle_lemma).tag("VVPP").dep("oc").head(1))
            .push(TokenSpec::punct(".").head(1))
            .build()
            .unwrap()
    }

    #[rstest]
    #[case("haben", "gehen", Some("SEIN_ERROR"))]
    #[case("sein", "gehen", None)]
    #[case("sein", "machen", Some("HABEN_ERROR"))]
    #[case("haben", "machen", None)]
    #[case("werden", "kommen", Some("SEIN_ERROR"))]
    fn auxiliary_choice(
        #[case] aux: &str,
        #[case] participle: &str,
        #[case] expected: Option<&str>,
    ) {
        let findings = check(&perfekt(aux, participle));
        let codes: Vec<_> = findings
            .iter()
            .filter_map(|f| f.details.as_ref().and_then(Value::as_str))
            .collect();
        assert_eq!(codes, expected.into_iter().collect::<Vec<_>>());
        for finding in &findings {
            assert_eq!(finding.spans, Some(vec![1]));
        }
    }

    #[test]
    fn sein_error_message() {
        let findings = check(&perfekt("haben", "gehen"));
        assert_eq!(
            findings[0].message,
            "This verb forms the Perfekt with 'sein', but you used 'haben'."
        );
    }

    #[test]
    fn missing_participle_means_no_finding() {
        let sentence = SentenceBuilder::new()
            .push(TokenSpec::new("Ich", "PRON").head(1))
            .push(TokenSpec::new("habe", "AUX").lemma("haben").tag("VAFIN"))
            .build()
            .unwrap();
        assert!(check(&sentence).is_empty());
    }

    #[test]
    fn last_auxiliary_wins() {
        // Ich bin gegangen und habe gegessen .
        let sentence = SentenceBuilder::new()
            .push(TokenSpec::new("Ich", "PRON").head(1))
            .push(TokenSpec::new("bin", "AUX").lemma("sein").tag("VAFIN"))
            .push(TokenSpec::new("gegangen", "VERB").lemma("gehen").tag("VVPP").head(1))
            .push(TokenSpec::new("und", "CCONJ").head(1))
            .push(TokenSpec::new("habe", "AUX").lemma("haben").tag("VAFIN").head(1))
            .push(TokenSpec::new("gegessen", "VERB").lemma("essen").tag("VVPP").head(4))
            .build()
            .unwrap();
        assert!(check(&sentence).is_empty());
    }
}
