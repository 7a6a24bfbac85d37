//! Annotated-sentence model.
//!
//! A sentence is an arena of tokens addressed by index. The dependency tree is
//! stored as precomputed index lists on each token (`head`, `children`,
//! `subtree`), so traversal never needs live references between tokens.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::{DependencyLabel, PartOfSpeech};
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Morphology
// ---------------------------------------------------------------------------

/// Morphological features of a token, e.g. `Case → [Dat]`.
///
/// An absent feature reads as an empty value set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Morphology(BTreeMap<String, Vec<String>>);

impl Morphology {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value to a feature, keeping values unique and in insertion order.
    pub fn insert(&mut self, feature: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let values = self.0.entry(feature.into()).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Values of `feature`, empty when the feature is absent.
    #[must_use]
    pub fn get(&self, feature: &str) -> &[String] {
        self.0.get(feature).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn has(&self, feature: &str, value: &str) -> bool {
        self.get(feature).iter().any(|v| v == value)
    }

    #[must_use]
    pub fn case(&self) -> &[String] {
        self.get("Case")
    }

    #[must_use]
    pub fn pron_type(&self) -> &[String] {
        self.get("PronType")
    }

    /// `VerbForm=Fin`
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.has("VerbForm", "Fin")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses the Universal Dependencies FEATS notation: `Case=Dat|PronType=Prs`.
/// Multiple values of one feature are comma-separated (`Case=Acc,Nom`).
impl FromStr for Morphology {
    type Err = CoreError;

    fn from_str(feats: &str) -> Result<Self, Self::Err> {
        let mut morph = Self::new();
        let feats = feats.trim();
        if feats.is_empty() || feats == "_" {
            return Ok(morph);
        }

        for pair in feats.split('|') {
            let Some((feature, values)) = pair.split_once('=') else {
                return Err(CoreError::Validation(format!(
                    "morphological feature without value: '{pair}'"
                )));
            };
            let feature = feature.trim();
            if feature.is_empty() {
                return Err(CoreError::Validation(format!(
                    "morphological feature without name: '{pair}'"
                )));
            }
            for value in values.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                morph.insert(feature, value);
            }
        }
        Ok(morph)
    }
}

impl fmt::Display for Morphology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(|(feature, values)| format!("{feature}={}", values.join(",")))
            .collect::<Vec<_>>()
            .join("|");
        f.write_str(&rendered)
    }
}

// ---------------------------------------------------------------------------
// AnnotatedToken
// ---------------------------------------------------------------------------

/// One word or punctuation mark of an annotated sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Position in the sentence; the token's identity for span references.
    pub index: usize,
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Fine-grained tag (STTS), e.g. `VVPP`, `VAFIN`.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub dep: DependencyLabel,
    #[serde(default)]
    pub morph: Morphology,
    pub is_alpha: bool,
    pub is_punct: bool,
    #[serde(default)]
    pub is_oov: bool,
    /// Index of the syntactic head; equal to `index` for the root.
    pub head: usize,
    #[serde(default)]
    pub children: Vec<usize>,
    /// All descendants plus the token itself, in sentence order.
    #[serde(default)]
    pub subtree: Vec<usize>,
}

impl AnnotatedToken {
    #[must_use]
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    #[must_use]
    pub fn lower_lemma(&self) -> String {
        self.lemma.to_lowercase()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.head == self.index
    }

    /// Finite verb or auxiliary.
    #[must_use]
    pub fn is_finite_verb(&self) -> bool {
        self.pos.is_verbal() && self.morph.is_finite()
    }
}

// ---------------------------------------------------------------------------
// AnnotatedSentence
// ---------------------------------------------------------------------------

/// Half-open token range `[start, end)` of one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

/// An annotated text: tokens plus sentence boundaries.
///
/// Construction validates the index invariants, so every index stored on a
/// token is guaranteed to address a token of the same sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSentence")]
pub struct AnnotatedSentence {
    tokens: Vec<AnnotatedToken>,
    sentences: Vec<SentenceSpan>,
}

#[derive(Deserialize)]
struct RawSentence {
    tokens: Vec<AnnotatedToken>,
    #[serde(default)]
    sentences: Vec<SentenceSpan>,
}

impl TryFrom<RawSentence> for AnnotatedSentence {
    type Error = CoreError;

    fn try_from(raw: RawSentence) -> Result<Self, Self::Error> {
        Self::new(raw.tokens, raw.sentences)
    }
}

impl AnnotatedSentence {
    /// Build a sentence from fully populated tokens.
    ///
    /// An empty `sentences` list means the whole token sequence is one sentence.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MalformedSentence` when indices are not `0..n` in
    /// order, when a head/child/subtree index is out of range, when a subtree
    /// does not contain its own token, or when sentence spans overlap or run
    /// past the end.
    pub fn new(
        tokens: Vec<AnnotatedToken>,
        sentences: Vec<SentenceSpan>,
    ) -> Result<Self, CoreError> {
        let len = tokens.len();
        for (position, token) in tokens.iter().enumerate() {
            if token.index != position {
                return Err(CoreError::MalformedSentence(format!(
                    "token '{}' at position {position} has index {}",
                    token.text, token.index
                )));
            }
            if token.head >= len {
                return Err(CoreError::MalformedSentence(format!(
                    "token {position} has head {} outside 0..{len}",
                    token.head
                )));
            }
            if let Some(bad) = token.children.iter().chain(&token.subtree).find(|&&i| i >= len) {
                return Err(CoreError::MalformedSentence(format!(
                    "token {position} references index {bad} outside 0..{len}"
                )));
            }
            if !token.subtree.contains(&position) {
                return Err(CoreError::MalformedSentence(format!(
                    "subtree of token {position} does not contain the token itself"
                )));
            }
        }

        let sentences = if sentences.is_empty() && len > 0 {
            vec![SentenceSpan { start: 0, end: len }]
        } else {
            sentences
        };

        let mut previous_end = 0;
        for span in &sentences {
            if span.start < previous_end || span.start >= span.end || span.end > len {
                return Err(CoreError::MalformedSentence(format!(
                    "invalid sentence span {}..{} for {len} tokens",
                    span.start, span.end
                )));
            }
            previous_end = span.end;
        }

        Ok(Self { tokens, sentences })
    }

    #[must_use]
    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<&AnnotatedToken> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedToken> {
        self.tokens.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn sentences(&self) -> &[SentenceSpan] {
        &self.sentences
    }

    /// Tokens of the first sentence; structural checks only look here.
    #[must_use]
    pub fn first_sentence(&self) -> &[AnnotatedToken] {
        self.sentences
            .first()
            .map_or(&[][..], |span| &self.tokens[span.start..span.end])
    }

    /// Direct dependents of `token`, in sentence order.
    pub fn children<'a>(
        &'a self,
        token: &'a AnnotatedToken,
    ) -> impl Iterator<Item = &'a AnnotatedToken> + 'a {
        token.children.iter().filter_map(|&i| self.tokens.get(i))
    }

    /// Surface forms of all tokens, punctuation included.
    #[must_use]
    pub fn surface_forms(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a AnnotatedSentence {
    type Item = &'a AnnotatedToken;
    type IntoIter = std::slice::Iter<'a, AnnotatedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

// ---------------------------------------------------------------------------
// SentenceBuilder
// ---------------------------------------------------------------------------

/// Description of one token for [`SentenceBuilder`].
#[derive(Debug, Clone)]
pub struct TokenSpec {
    text: String,
    pos: PartOfSpeech,
    lemma: Option<String>,
    tag: String,
    dep: DependencyLabel,
    feats: String,
    head: Option<usize>,
    is_oov: bool,
}

impl TokenSpec {
    #[must_use]
    pub fn new(text: impl Into<String>, pos: impl Into<PartOfSpeech>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            lemma: None,
            tag: String::new(),
            dep: DependencyLabel::default(),
            feats: String::new(),
            head: None,
            is_oov: false,
        }
    }

    #[must_use]
    pub fn punct(text: impl Into<String>) -> Self {
        Self::new(text, PartOfSpeech::Punct).tag("$.").dep("punct")
    }

    /// Defaults to the surface form when not set.
    #[must_use]
    pub fn lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn dep(mut self, dep: impl Into<DependencyLabel>) -> Self {
        self.dep = dep.into();
        self
    }

    /// FEATS string, parsed when the sentence is built.
    #[must_use]
    pub fn feats(mut self, feats: impl Into<String>) -> Self {
        self.feats = feats.into();
        self
    }

    /// Index of the head token. Tokens without a head are roots.
    #[must_use]
    pub const fn head(mut self, head: usize) -> Self {
        self.head = Some(head);
        self
    }

    #[must_use]
    pub const fn oov(mut self) -> Self {
        self.is_oov = true;
        self
    }
}

/// Builds an [`AnnotatedSentence`] from head indices, deriving `children` and
/// `subtree` for every token.
#[derive(Debug, Clone, Default)]
pub struct SentenceBuilder {
    specs: Vec<TokenSpec>,
    breaks: Vec<usize>,
}

impl SentenceBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, spec: TokenSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Start a new sentence with the next pushed token.
    #[must_use]
    pub fn sentence_break(mut self) -> Self {
        let at = self.specs.len();
        if at > 0 && self.breaks.last() != Some(&at) {
            self.breaks.push(at);
        }
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError` when a head is out of range, the heads form a cycle,
    /// or a FEATS string is malformed.
    pub fn build(self) -> Result<AnnotatedSentence, CoreError> {
        let len = self.specs.len();
        let heads = self
            .specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let head = spec.head.unwrap_or(i);
                if head >= len {
                    Err(CoreError::MalformedSentence(format!(
                        "token {i} has head {head} outside 0..{len}"
                    )))
                } else {
                    Ok(head)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut children = vec![Vec::new(); len];
        for (i, &head) in heads.iter().enumerate() {
            if head != i {
                children[head].push(i);
            }
        }

        let subtrees = (0..len)
            .map(|i| collect_subtree(i, &children, len))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tokens = Vec::with_capacity(len);
        for (index, ((spec, children), subtree)) in self
            .specs
            .into_iter()
            .zip(children)
            .zip(subtrees)
            .enumerate()
        {
            let morph = spec.feats.parse::<Morphology>()?;
            let is_alpha = !spec.text.is_empty() && spec.text.chars().all(char::is_alphabetic);
            let is_punct = spec.pos == PartOfSpeech::Punct;
            tokens.push(AnnotatedToken {
                index,
                lemma: spec.lemma.unwrap_or_else(|| spec.text.clone()),
                text: spec.text,
                pos: spec.pos,
                tag: spec.tag,
                dep: spec.dep,
                morph,
                is_alpha,
                is_punct,
                is_oov: spec.is_oov,
                head: heads[index],
                children,
                subtree,
            });
        }

        let mut bounds = Vec::with_capacity(self.breaks.len() + 2);
        bounds.push(0);
        bounds.extend(self.breaks.iter().copied().filter(|&b| b < len));
        bounds.push(len);
        let sentences = bounds
            .windows(2)
            .filter(|w| w[0] < w[1])
            .map(|w| SentenceSpan { start: w[0], end: w[1] })
            .collect();

        AnnotatedSentence::new(tokens, sentences)
    }
}

/// Depth-first collection of `root` and its descendants, sorted by index.
fn collect_subtree(
    root: usize,
    children: &[Vec<usize>],
    len: usize,
) -> Result<Vec<usize>, CoreError> {
    let mut seen = vec![false; len];
    let mut stack = vec![root];
    let mut subtree = Vec::new();
    while let Some(node) = stack.pop() {
        if seen[node] {
            return Err(CoreError::MalformedSentence(format!(
                "dependency cycle through token {node}"
            )));
        }
        seen[node] = true;
        subtree.push(node);
        stack.extend(children[node].iter().copied());
    }
    subtree.sort_unstable();
    Ok(subtree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dass_clause() -> AnnotatedSentence {
        // Ich weiß , dass er morgen kommt .
        SentenceBuilder::new()
            .push(TokenSpec::new("Ich", "PRON").lemma("ich").dep("sb").head(1))
            .push(TokenSpec::new("weiß", "VERB").lemma("wissen").dep("ROOT").feats("VerbForm=Fin"))
            .push(TokenSpec::punct(",").head(1))
            .push(TokenSpec::new("dass", "SCONJ").dep("cp").head(6))
            .push(TokenSpec::new("er", "PRON").dep("sb").head(6))
            .push(TokenSpec::new("morgen", "ADV").dep("mo").head(6))
            .push(TokenSpec::new("kommt", "VERB").lemma("kommen").dep("oc").head(1))
            .push(TokenSpec::punct(".").head(1))
            .build()
            .expect("sentence should build")
    }

    #[test]
    fn builder_derives_children_and_subtrees() {
        let sentence = dass_clause();
        let kommt = sentence.token(6).unwrap();
        assert_eq!(kommt.children, vec![3, 4, 5]);
        assert_eq!(kommt.subtree, vec![3, 4, 5, 6]);

        let root = sentence.token(1).unwrap();
        assert!(root.is_root());
        assert_eq!(root.subtree, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn builder_sets_alpha_and_punct_flags() {
        let sentence = dass_clause();
        assert!(sentence.token(0).unwrap().is_alpha);
        assert!(!sentence.token(2).unwrap().is_alpha);
        assert!(sentence.token(2).unwrap().is_punct);
    }

    #[test]
    fn children_iterator_yields_tokens() {
        let sentence = dass_clause();
        let kommt = sentence.token(6).unwrap();
        let texts: Vec<&str> = sentence.children(kommt).map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["dass", "er", "morgen"]);
    }

    #[test]
    fn head_cycle_is_rejected() {
        let result = SentenceBuilder::new()
            .push(TokenSpec::new("a", "X").head(1))
            .push(TokenSpec::new("b", "X").head(0))
            .build();
        assert!(matches!(result, Err(CoreError::MalformedSentence(_))));
    }

    #[test]
    fn head_out_of_range_is_rejected() {
        let result = SentenceBuilder::new()
            .push(TokenSpec::new("a", "X").head(4))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn sentence_breaks_split_first_sentence() {
        let sentence = SentenceBuilder::new()
            .push(TokenSpec::new("Ja", "ADV"))
            .push(TokenSpec::punct(".").head(0))
            .sentence_break()
            .push(TokenSpec::new("Nein", "ADV"))
            .build()
            .unwrap();
        assert_eq!(sentence.sentences().len(), 2);
        assert_eq!(sentence.first_sentence().len(), 2);
    }

    #[test]
    fn empty_sentence_is_valid() {
        let sentence = SentenceBuilder::new().build().unwrap();
        assert!(sentence.is_empty());
        assert!(sentence.first_sentence().is_empty());
    }

    #[test]
    fn morphology_parses_feats_string() {
        let morph: Morphology = "Case=Acc,Nom|PronType=Prs|VerbForm=Fin".parse().unwrap();
        assert_eq!(morph.case(), ["Acc".to_string(), "Nom".to_string()]);
        assert!(morph.is_finite());
        assert!(morph.get("Number").is_empty());
        assert_eq!(morph.to_string(), "Case=Acc,Nom|PronType=Prs|VerbForm=Fin");
    }

    #[test]
    fn morphology_rejects_feature_without_value() {
        assert!("Case".parse::<Morphology>().is_err());
        assert!("_".parse::<Morphology>().unwrap().is_empty());
    }

    #[test]
    fn deserialization_validates_indices() {
        let json = r#"{
            "tokens": [
                {"index": 1, "text": "Hallo", "lemma": "hallo", "pos": "INTJ",
                 "is_alpha": true, "is_punct": false, "head": 0, "subtree": [0]}
            ]
        }"#;
        let parsed: Result<AnnotatedSentence, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn serialization_roundtrips_through_validation() {
        let sentence = dass_clause();
        let json = serde_json::to_string(&sentence).unwrap();
        let back: AnnotatedSentence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sentence);
    }
}
