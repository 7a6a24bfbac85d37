//! Annotation service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_url() -> String {
    "http://127.0.0.1:8090/annotate".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnnotatorConfig {
    /// Endpoint accepting `{"text": ...}` and answering with an annotated sentence.
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnnotatorConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-HTTP URL or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "annotator.url",
                format!("expected an http(s) URL, got '{}'", self.url),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "annotator.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
