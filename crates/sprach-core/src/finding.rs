//! Grammar findings and the evaluation outcome.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::FindingKind;

/// Upper bound on the number of findings returned for one evaluation.
pub const MAX_FINDINGS: usize = 5;

/// One detected issue.
///
/// Created by exactly one checker and read-only afterwards. `spans` holds the
/// token indices the finding attaches to; `None` marks a sentence-level finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarFinding {
    pub kind: FindingKind,
    pub message: String,
    pub spans: Option<Vec<usize>>,
    pub details: Option<Value>,
    /// Advisory only; ranking ignores it.
    pub blocking: bool,
    pub priority: u8,
}

impl GrammarFinding {
    /// A sentence-level, non-blocking finding with the kind's priority.
    #[must_use]
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            spans: None,
            details: None,
            blocking: false,
            priority: kind.priority(),
        }
    }

    /// Anchor the finding at one token.
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        self.spans = Some(vec![index]);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub const fn blocking(mut self) -> Self {
        self.blocking = true;
        self
    }

    #[must_use]
    pub fn first_span(&self) -> Option<usize> {
        self.spans.as_ref().and_then(|spans| spans.first().copied())
    }

    #[must_use]
    pub fn is_sentence_level(&self) -> bool {
        self.spans.as_ref().is_none_or(Vec::is_empty)
    }
}

/// Result of grading one learner sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub meaning_conveyed: bool,
    /// Echo of the target sentence.
    pub correct_sentence: String,
    /// Surface forms of the learner sentence.
    pub tokens: Vec<String>,
    /// Ranked findings, at most [`MAX_FINDINGS`].
    pub findings: Vec<GrammarFinding>,
}

impl EvaluationOutcome {
    /// Outcome of a full pipeline run: the meaning is conveyed exactly when no
    /// finding survived resolution.
    #[must_use]
    pub fn graded(
        correct_sentence: impl Into<String>,
        tokens: Vec<String>,
        mut findings: Vec<GrammarFinding>,
    ) -> Self {
        findings.truncate(MAX_FINDINGS);
        Self {
            meaning_conveyed: findings.is_empty(),
            correct_sentence: correct_sentence.into(),
            tokens,
            findings,
        }
    }

    /// Outcome of an early exit (invalid attempt, critical misspelling).
    #[must_use]
    pub fn rejected(
        correct_sentence: impl Into<String>,
        tokens: Vec<String>,
        mut findings: Vec<GrammarFinding>,
    ) -> Self {
        findings.truncate(MAX_FINDINGS);
        Self {
            meaning_conveyed: false,
            correct_sentence: correct_sentence.into(),
            tokens,
            findings,
        }
    }
}
