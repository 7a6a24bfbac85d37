//! # sprach-core
//!
//! Core types shared across all Sprach crates.
//!
//! This crate provides:
//! - The annotated-sentence model consumed by the grammar checkers
//!   (tokens, morphology, dependency tree as index arenas)
//! - Enums for parts of speech, dependency labels, finding kinds, and
//!   flashcard grammar focus
//! - `GrammarFinding` and `EvaluationOutcome`, the evaluator's output
//! - Wire response types for the `/evaluate` endpoint
//! - Flashcard entities
//! - The collaborator traits (`Annotator`, `Dictionary`) and cross-cutting errors

pub mod annotation;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod finding;
pub mod responses;
pub mod traits;

pub use annotation::{AnnotatedSentence, AnnotatedToken, Morphology, SentenceBuilder, TokenSpec};
pub use errors::{AnnotationError, CoreError};
pub use finding::{EvaluationOutcome, GrammarFinding, MAX_FINDINGS};
pub use traits::{Annotator, Dictionary};
