//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

const fn default_workers() -> usize {
    4
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5174".to_string(),
        "http://127.0.0.1:5174".to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Threads receiving requests from the shared listener.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Origins granted CORS access.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Flashcard deck JSON; empty selects the built-in deck.
    #[serde(default)]
    pub deck_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            workers: default_workers(),
            allowed_origins: default_allowed_origins(),
            deck_path: String::new(),
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unparsable bind address or
    /// a zero worker count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::invalid(
                "server.bind",
                format!("expected host:port, got '{}'", self.bind),
            ));
        }
        if self.workers == 0 {
            return Err(ConfigError::invalid(
                "server.workers",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}
