//! Tag sets and kind enums for Sprach.
//!
//! Part-of-speech and dependency labels follow the tag inventory of the German
//! annotation pipeline (Universal POS tags, TIGER dependency labels). Labels the
//! engine does not inspect are kept verbatim in an `Other` variant so nothing is
//! lost when a sentence is echoed back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PartOfSpeech
// ---------------------------------------------------------------------------

/// Coarse part-of-speech tag of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Aux,
    Adj,
    Adv,
    Propn,
    Det,
    Pron,
    Sconj,
    Punct,
    Other(String),
}

impl PartOfSpeech {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Aux => "AUX",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Propn => "PROPN",
            Self::Det => "DET",
            Self::Pron => "PRON",
            Self::Sconj => "SCONJ",
            Self::Punct => "PUNCT",
            Self::Other(tag) => tag,
        }
    }

    /// Verbs and auxiliaries.
    #[must_use]
    pub const fn is_verbal(&self) -> bool {
        matches!(self, Self::Verb | Self::Aux)
    }

    /// Determiners and pronouns, the tokens that carry case in a noun phrase.
    #[must_use]
    pub const fn is_determiner_like(&self) -> bool {
        matches!(self, Self::Det | Self::Pron)
    }

    /// Open-class words checked for spelling.
    #[must_use]
    pub const fn is_content(&self) -> bool {
        matches!(
            self,
            Self::Noun | Self::Verb | Self::Aux | Self::Adj | Self::Adv | Self::Propn
        )
    }
}

impl From<&str> for PartOfSpeech {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "NOUN" => Self::Noun,
            "VERB" => Self::Verb,
            "AUX" => Self::Aux,
            "ADJ" => Self::Adj,
            "ADV" => Self::Adv,
            "PROPN" => Self::Propn,
            "DET" => Self::Det,
            "PRON" => Self::Pron,
            "SCONJ" => Self::Sconj,
            "PUNCT" => Self::Punct,
            _ => Self::Other(tag.to_string()),
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.as_str().to_string()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DependencyLabel
// ---------------------------------------------------------------------------

/// Syntactic role of a token relative to its head.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DependencyLabel {
    /// `sb`
    Subject,
    /// `ROOT`
    Root,
    /// `oc`
    ClausalObject,
    /// `nk`, noun kernel element (determiners and adjectives inside an NP).
    NounKernel,
    /// `aux`
    Auxiliary,
    /// `aux:pass`
    PassiveAuxiliary,
    Other(String),
}

impl DependencyLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Subject => "sb",
            Self::Root => "ROOT",
            Self::ClausalObject => "oc",
            Self::NounKernel => "nk",
            Self::Auxiliary => "aux",
            Self::PassiveAuxiliary => "aux:pass",
            Self::Other(label) => label,
        }
    }

    /// Labels that mark a syntactic anchor of the clause.
    #[must_use]
    pub const fn is_anchor(&self) -> bool {
        matches!(self, Self::Subject | Self::Root | Self::ClausalObject)
    }

    #[must_use]
    pub const fn is_auxiliary(&self) -> bool {
        matches!(self, Self::Auxiliary | Self::PassiveAuxiliary)
    }
}

impl From<&str> for DependencyLabel {
    fn from(label: &str) -> Self {
        match label {
            "sb" => Self::Subject,
            "ROOT" | "root" => Self::Root,
            "oc" => Self::ClausalObject,
            "nk" => Self::NounKernel,
            "aux" => Self::Auxiliary,
            "aux:pass" => Self::PassiveAuxiliary,
            _ => Self::Other(label.to_string()),
        }
    }
}

impl From<String> for DependencyLabel {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<DependencyLabel> for String {
    fn from(label: DependencyLabel) -> Self {
        label.as_str().to_string()
    }
}

impl Default for DependencyLabel {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for DependencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FindingKind
// ---------------------------------------------------------------------------

/// Category of a grammar finding.
///
/// Serialized names are the `type` strings of the `/evaluate` wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    #[serde(rename = "noun_capitalization")]
    Capitalization,
    #[serde(rename = "perfekt_auxiliary")]
    PerfektAuxiliary,
    #[serde(rename = "main_clause_v2")]
    MainClauseVerbPosition,
    #[serde(rename = "subordinate_verb_final")]
    SubordinateVerbPosition,
    #[serde(rename = "accusative_dative_prepositions")]
    CaseAgreement,
    Spelling,
    #[serde(rename = "invalid_sentence")]
    InvalidAttempt,
    #[serde(rename = "word_out_of_target")]
    ExtraWord,
    NearMiss,
}

impl FindingKind {
    /// Conflict-resolution priority. Higher wins.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn priority(self) -> u8 {
        match self {
            Self::InvalidAttempt => 100,
            Self::ExtraWord => 90,
            Self::Spelling => 50,
            Self::MainClauseVerbPosition => 40,
            Self::SubordinateVerbPosition => 40,
            Self::CaseAgreement => 30,
            Self::PerfektAuxiliary => 30,
            Self::Capitalization => 20,
            Self::NearMiss => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Capitalization => "noun_capitalization",
            Self::PerfektAuxiliary => "perfekt_auxiliary",
            Self::MainClauseVerbPosition => "main_clause_v2",
            Self::SubordinateVerbPosition => "subordinate_verb_final",
            Self::CaseAgreement => "accusative_dative_prepositions",
            Self::Spelling => "spelling",
            Self::InvalidAttempt => "invalid_sentence",
            Self::ExtraWord => "word_out_of_target",
            Self::NearMiss => "near_miss",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GrammarFocus
// ---------------------------------------------------------------------------

/// Grammar concept a flashcard is designed to practise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GrammarFocus {
    #[serde(rename = "perfekt_auxiliary_sein_vs_haben")]
    PerfektAuxiliary,
    #[serde(rename = "verb_position_main_clause_v2")]
    MainClauseV2,
    #[serde(rename = "verb_position_subordinate_clause")]
    SubordinateVerbFinal,
    NounCapitalization,
    #[serde(rename = "accusative_vs_dative_prepositions")]
    AccusativeDativePrepositions,
}

impl GrammarFocus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerfektAuxiliary => "perfekt_auxiliary_sein_vs_haben",
            Self::MainClauseV2 => "verb_position_main_clause_v2",
            Self::SubordinateVerbFinal => "verb_position_subordinate_clause",
            Self::NounCapitalization => "noun_capitalization",
            Self::AccusativeDativePrepositions => "accusative_vs_dative_prepositions",
        }
    }
}

impl fmt::Display for GrammarFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("NOUN", PartOfSpeech::Noun)]
    #[case("aux", PartOfSpeech::Aux)]
    #[case("SCONJ", PartOfSpeech::Sconj)]
    #[case("X", PartOfSpeech::Other("X".to_string()))]
    fn pos_parses_from_tag(#[case] tag: &str, #[case] expected: PartOfSpeech) {
        assert_eq!(PartOfSpeech::from(tag), expected);
    }

    #[test]
    fn pos_serializes_as_tag_string() {
        let json = serde_json::to_string(&PartOfSpeech::Propn).unwrap();
        assert_eq!(json, "\"PROPN\"");
        let other: PartOfSpeech = serde_json::from_str("\"INTJ\"").unwrap();
        assert_eq!(other.as_str(), "INTJ");
    }

    #[test]
    fn dependency_label_keeps_unknown_labels() {
        let label = DependencyLabel::from("mo");
        assert_eq!(label, DependencyLabel::Other("mo".to_string()));
        assert_eq!(label.to_string(), "mo");
        assert!(DependencyLabel::from("oc").is_anchor());
        assert!(DependencyLabel::from("aux:pass").is_auxiliary());
    }

    #[test]
    fn finding_kind_wire_names_match_as_str() {
        let kinds = [
            FindingKind::Capitalization,
            FindingKind::PerfektAuxiliary,
            FindingKind::MainClauseVerbPosition,
            FindingKind::SubordinateVerbPosition,
            FindingKind::CaseAgreement,
            FindingKind::Spelling,
            FindingKind::InvalidAttempt,
            FindingKind::ExtraWord,
            FindingKind::NearMiss,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn priorities_follow_severity_order() {
        assert!(FindingKind::InvalidAttempt.priority() > FindingKind::ExtraWord.priority());
        assert!(FindingKind::ExtraWord.priority() > FindingKind::Spelling.priority());
        assert!(FindingKind::Spelling.priority() > FindingKind::MainClauseVerbPosition.priority());
        assert_eq!(
            FindingKind::CaseAgreement.priority(),
            FindingKind::PerfektAuxiliary.priority()
        );
        assert!(FindingKind::Capitalization.priority() > FindingKind::NearMiss.priority());
    }

    #[test]
    fn grammar_focus_roundtrips() {
        let focus: GrammarFocus = serde_json::from_str("\"noun_capitalization\"").unwrap();
        assert_eq!(focus, GrammarFocus::NounCapitalization);
        let json = serde_json::to_string(&GrammarFocus::PerfektAuxiliary).unwrap();
        assert_eq!(json, "\"perfekt_auxiliary_sein_vs_haben\"");
    }
}
