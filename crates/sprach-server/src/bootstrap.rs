use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use sprach_annotate::HttpAnnotator;
use sprach_config::SprachConfig;
use sprach_core::{Annotator, Dictionary};
use sprach_eval::Evaluator;
use sprach_lexicon::FrequencyDictionary;

use crate::cli::GlobalFlags;
use crate::server::{Deck, SharedEvaluator};

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SprachConfig> {
    SprachConfig::load_with_dotenv(flags.config.as_deref()).context("failed to load configuration")
}

pub fn load_deck(config: &SprachConfig) -> anyhow::Result<Deck> {
    if config.server.deck_path.is_empty() {
        Deck::builtin()
    } else {
        Deck::load(Path::new(&config.server.deck_path))
    }
}

/// Wire the HTTP annotator and the frequency dictionary into an evaluator.
///
/// `targets` are added to the dictionary so reference sentences never count as
/// misspelled.
pub fn build_evaluator(config: &SprachConfig, targets: &[String]) -> anyhow::Result<SharedEvaluator> {
    let annotator =
        HttpAnnotator::new(&config.annotator).context("failed to build annotator client")?;
    tracing::debug!(url = annotator.url(), "annotator configured");

    let dictionary = load_dictionary(config, targets)?;
    let annotator: Arc<dyn Annotator> = Arc::new(annotator);
    let dictionary: Arc<dyn Dictionary> = Arc::new(dictionary);
    Ok(Evaluator::new(annotator, dictionary, config.evaluator.clone()))
}

fn load_dictionary(config: &SprachConfig, targets: &[String]) -> anyhow::Result<FrequencyDictionary> {
    let lexicon = &config.lexicon;
    let mut dictionary = if lexicon.is_configured() {
        FrequencyDictionary::from_path(Path::new(&lexicon.path), lexicon.max_edit_distance)
            .with_context(|| format!("failed to load lexicon {}", lexicon.path))?
    } else {
        tracing::warn!(
            "no lexicon.path configured, using the built-in word list; \
             set lexicon.path to a full German frequency list for better spelling checks"
        );
        FrequencyDictionary::builtin(lexicon.max_edit_distance)
            .context("built-in lexicon is invalid")?
    };

    let words: Vec<String> = targets
        .iter()
        .flat_map(|t| t.split(|c: char| !c.is_alphabetic()))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    dictionary.extend_words(words.iter().map(String::as_str));

    tracing::info!(words = dictionary.len(), "lexicon loaded");
    Ok(dictionary)
}
