//! Fake collaborators for router tests.

use std::sync::Arc;

use sprach_config::{EvaluatorConfig, ServerConfig};
use sprach_core::{
    AnnotatedSentence, AnnotationError, Annotator, Dictionary, SentenceBuilder, TokenSpec,
};
use sprach_eval::Evaluator;

use super::{AppState, Deck};

/// Splits on whitespace, peels trailing punctuation, attaches everything to the
/// first token.
struct WhitespaceAnnotator;

impl Annotator for WhitespaceAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotationError> {
        let mut specs = Vec::new();
        for word in text.split_whitespace() {
            let stem = word.trim_end_matches(['.', ',', '!', '?']);
            if !stem.is_empty() {
                specs.push(TokenSpec::new(stem, "X"));
            }
            for mark in word[stem.len()..].chars() {
                specs.push(TokenSpec::punct(mark.to_string()));
            }
        }
        specs
            .into_iter()
            .enumerate()
            .fold(SentenceBuilder::new(), |builder, (i, spec)| {
                builder.push(if i == 0 { spec.dep("ROOT") } else { spec.head(0) })
            })
            .build()
            .map_err(|error| AnnotationError::Decode(error.to_string()))
    }
}

struct OfflineAnnotator;

impl Annotator for OfflineAnnotator {
    fn annotate(&self, _text: &str) -> Result<AnnotatedSentence, AnnotationError> {
        Err(AnnotationError::Transport("connection refused".to_string()))
    }
}

struct KnowsEverything;

impl Dictionary for KnowsEverything {
    fn is_unknown(&self, _word: &str) -> bool {
        false
    }

    fn suggest_correction(&self, word: &str) -> Option<String> {
        Some(word.to_string())
    }
}

fn state_with(annotator: Arc<dyn Annotator>) -> AppState {
    let dictionary: Arc<dyn Dictionary> = Arc::new(KnowsEverything);
    AppState {
        evaluator: Evaluator::new(annotator, dictionary, EvaluatorConfig::default()),
        deck: Deck::builtin().expect("built-in deck should parse"),
        server: ServerConfig::default(),
    }
}

pub fn state() -> AppState {
    state_with(Arc::new(WhitespaceAnnotator))
}

pub fn failing_state() -> AppState {
    state_with(Arc::new(OfflineAnnotator))
}
