//! Collaborator seams consumed by the evaluator.
//!
//! Both collaborators are expensive, read-only after construction, and shared
//! across concurrent evaluation calls, hence the `Send + Sync` bounds. The call
//! site owns their lifetime and injects them into the evaluator.

use std::sync::Arc;

use crate::annotation::AnnotatedSentence;
use crate::errors::AnnotationError;

/// Turns raw text into an annotated sentence.
///
/// Implementations must be deterministic for identical input and must populate
/// dependency labels and the `Case`, `VerbForm` and `PronType` features. A
/// missing feature is an empty value set, not an error.
pub trait Annotator: Send + Sync {
    /// # Errors
    ///
    /// Returns `AnnotationError` when the text cannot be annotated.
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotationError>;
}

/// Spelling oracle. Both methods receive lowercase words.
pub trait Dictionary: Send + Sync {
    /// `true` when the word is not in the dictionary.
    fn is_unknown(&self, word: &str) -> bool;

    /// Best-guess correction, if any candidate exists.
    fn suggest_correction(&self, word: &str) -> Option<String>;
}

impl<T: Annotator + ?Sized> Annotator for Arc<T> {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotationError> {
        (**self).annotate(text)
    }
}

impl<T: Dictionary + ?Sized> Dictionary for Arc<T> {
    fn is_unknown(&self, word: &str) -> bool {
        (**self).is_unknown(word)
    }

    fn suggest_correction(&self, word: &str) -> Option<String> {
        (**self).suggest_correction(word)
    }
}
