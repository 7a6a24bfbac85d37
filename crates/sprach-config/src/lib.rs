//! # sprach-config
//!
//! Layered configuration loading for Sprach using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPRACH_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.sprach/config.toml`
//! 4. User-level `~/.config/sprach/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPRACH_EVALUATOR__MIN_COVERAGE` -> `evaluator.min_coverage`,
//! `SPRACH_SERVER__BIND` -> `server.bind`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sprach_config::SprachConfig;
//!
//! let config = SprachConfig::load_with_dotenv(None).expect("config");
//! println!("annotator at {}", config.annotator.url);
//! ```

mod annotator;
mod error;
mod evaluator;
mod lexicon;
mod server;

pub use annotator::AnnotatorConfig;
pub use error::ConfigError;
pub use evaluator::{CoverageBasis, EvaluatorConfig};
pub use lexicon::LexiconConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SprachConfig {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub annotator: AnnotatorConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SprachConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse and
    /// `ConfigError::InvalidValue` when a field is out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sprach/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // An explicit file must exist; Toml::file would silently skip it otherwise.
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("SPRACH_").split("__"))
    }

    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found across sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.evaluator.validate()?;
        self.annotator.validate()?;
        self.lexicon.validate()?;
        self.server.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sprach").join("config.toml"))
    }
}
