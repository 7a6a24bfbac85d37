//! # sprach-eval
//!
//! Grammar-evaluation rule engine for German learner sentences.
//!
//! An evaluation runs in fixed stages:
//! 1. Spelling. A misspelled syntactic anchor ends the evaluation.
//! 2. Meaning-coverage gate. Unrelated answers get a single blocking
//!    `invalid_sentence` finding.
//! 3. Structural and morphological checkers (V2, verb-final, capitalization,
//!    Perfekt auxiliary, case agreement).
//! 4. Extra words not explained by an earlier finding, then a near-miss note.
//! 5. Conflict resolution: one finding per token, ranked, at most five.
//!
//! Collaborators (annotation pipeline, spelling dictionary) are injected into
//! [`Evaluator::new`].

pub mod checkers;
mod error;
mod evaluator;
pub mod messages;
pub mod resolver;
pub mod similarity;

#[cfg(test)]
mod test_support;

pub use error::{EvalError, SentenceRole};
pub use evaluator::{Evaluator, normalize_text};
