//! Sentence fixtures for unit tests.

use sprach_core::{AnnotatedSentence, SentenceBuilder, TokenSpec};

/// Sentence whose first token is the root and every other token hangs off it.
/// `pos` of `"PUNCT"` produces a punctuation token.
pub fn flat(words: &[(&str, &str)]) -> AnnotatedSentence {
    words
        .iter()
        .enumerate()
        .fold(SentenceBuilder::new(), |builder, (i, &(text, pos))| {
            let spec = if pos == "PUNCT" {
                TokenSpec::punct(text)
            } else {
                TokenSpec::new(text, pos)
            };
            builder.push(if i == 0 { spec.dep("ROOT") } else { spec.head(0) })
        })
        .build()
        .expect("flat fixture should build")
}

/// "Ich gehe nach Hause."
pub fn ich_gehe_nach_hause() -> AnnotatedSentence {
    SentenceBuilder::new()
        .push(TokenSpec::new("Ich", "PRON").lemma("ich").dep("sb").feats("Case=Nom|PronType=Prs").head(1))
        .push(TokenSpec::new("gehe", "VERB").lemma("gehen").tag("VVFIN").dep("ROOT").feats("VerbForm=Fin"))
        .push(TokenSpec::new("nach", "ADP").dep("mo").head(1))
        .push(TokenSpec::new("Hause", "NOUN").lemma("Haus").dep("nk").feats("Case=Dat").head(2))
        .push(TokenSpec::punct(".").head(1))
        .build()
        .expect("fixture should build")
}

/// Dictionary with a fixed vocabulary and fixed corrections.
#[derive(Debug, Default)]
pub struct FixedDictionary {
    known: std::collections::HashSet<String>,
    corrections: std::collections::HashMap<String, String>,
}

impl FixedDictionary {
    pub fn knowing(words: &[&str]) -> Self {
        Self {
            known: words.iter().map(|w| (*w).to_string()).collect(),
            corrections: std::collections::HashMap::new(),
        }
    }

    pub fn correcting(mut self, from: &str, to: &str) -> Self {
        self.corrections.insert(from.to_string(), to.to_string());
        self
    }
}

impl sprach_core::Dictionary for FixedDictionary {
    fn is_unknown(&self, word: &str) -> bool {
        !self.known.contains(word)
    }

    fn suggest_correction(&self, word: &str) -> Option<String> {
        if self.known.contains(word) {
            return Some(word.to_string());
        }
        self.corrections.get(word).cloned()
    }
}
