//! Evaluation error types.

use sprach_core::AnnotationError;
use thiserror::Error;

/// The only failures an evaluation call can produce. Grammar findings,
/// rejected attempts and critical misspellings are outcomes, not errors.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("failed to annotate {which} sentence: {source}")]
    Annotation {
        which: SentenceRole,
        #[source]
        source: AnnotationError,
    },
}

/// Which half of the sentence pair an error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceRole {
    User,
    Target,
}

impl std::fmt::Display for SentenceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Target => "target",
        })
    }
}
