//! Checker thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_min_coverage() -> f64 {
    0.60
}

const fn default_max_extra() -> usize {
    2
}

const fn default_max_core_extra() -> usize {
    1
}

const fn default_max_modifier_extra() -> usize {
    2
}

const fn default_verb_similarity_threshold() -> f64 {
    0.75
}

const fn default_near_miss_max_mismatch() -> usize {
    1
}

/// What the meaning-coverage gate compares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageBasis {
    /// Lowercase surface forms.
    #[default]
    Surface,
    /// Lowercase lemmas.
    Lemma,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EvaluatorConfig {
    /// Minimum share of target words the answer must contain.
    #[serde(default = "default_min_coverage")]
    pub min_coverage: f64,

    /// Maximum number of answer words absent from the target.
    #[serde(default = "default_max_extra")]
    pub max_extra: usize,

    /// Maximum extra nouns, verbs and proper nouns.
    #[serde(default = "default_max_core_extra")]
    pub max_core_extra: usize,

    /// Maximum extra adjectives and adverbs.
    #[serde(default = "default_max_modifier_extra")]
    pub max_modifier_extra: usize,

    #[serde(default)]
    pub coverage_basis: CoverageBasis,

    /// Below this ratio an unknown verb is reported as a misspelled crucial verb.
    #[serde(default = "default_verb_similarity_threshold")]
    pub verb_similarity_threshold: f64,

    /// Largest word-level mismatch still rewarded with a near-miss note.
    #[serde(default = "default_near_miss_max_mismatch")]
    pub near_miss_max_mismatch: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            min_coverage: default_min_coverage(),
            max_extra: default_max_extra(),
            max_core_extra: default_max_core_extra(),
            max_modifier_extra: default_max_modifier_extra(),
            coverage_basis: CoverageBasis::default(),
            verb_similarity_threshold: default_verb_similarity_threshold(),
            near_miss_max_mismatch: default_near_miss_max_mismatch(),
        }
    }
}

impl EvaluatorConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a ratio lies outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("evaluator.min_coverage", self.min_coverage)?;
        check_ratio(
            "evaluator.verb_similarity_threshold",
            self.verb_similarity_threshold,
        )
    }
}

fn check_ratio(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("expected a ratio between 0.0 and 1.0, got {value}"),
        ))
    }
}
