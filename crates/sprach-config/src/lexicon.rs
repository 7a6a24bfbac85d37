//! Spelling dictionary configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_max_edit_distance() -> u8 {
    2
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LexiconConfig {
    /// Word-frequency file (JSON object or `word count` lines).
    #[serde(default)]
    pub path: String,

    /// Largest edit distance searched for corrections (1 or 2).
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: u8,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

impl LexiconConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the edit distance is not 1 or 2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.max_edit_distance, 1 | 2) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "lexicon.max_edit_distance",
                format!("expected 1 or 2, got {}", self.max_edit_distance),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconfigured() {
        let config = LexiconConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.max_edit_distance, 2);
    }

    #[test]
    fn distance_three_is_rejected() {
        let config = LexiconConfig {
            max_edit_distance: 3,
            ..LexiconConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
