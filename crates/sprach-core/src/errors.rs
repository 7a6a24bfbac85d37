//! Cross-cutting error types for Sprach.
//!
//! Domain-specific errors (`ConfigError`, `LexiconError`, `EvalError`) live in
//! their own crates. `AnnotationError` is defined here because the
//! [`Annotator`](crate::traits::Annotator) trait returns it.

use thiserror::Error;

/// Errors that can be raised by any Sprach crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An annotated sentence violates the index invariants of the model.
    #[error("Malformed sentence: {0}")]
    MalformedSentence(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// The annotation collaborator could not produce a sentence for the input.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// Transport-level failure talking to the annotation service.
    #[error("annotation service unreachable: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("annotation service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("undecodable annotation response: {0}")]
    Decode(String),
}
