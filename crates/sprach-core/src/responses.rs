//! Wire types of the HTTP API.
//!
//! `EvaluationResponse` is the JSON shape returned by `POST /evaluate`; it is
//! derived from an [`EvaluationOutcome`] and never constructed by hand.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::FindingKind;
use crate::errors::CoreError;
use crate::finding::{EvaluationOutcome, GrammarFinding};

/// Maximum length, in characters, of a learner answer.
pub const MAX_ANSWER_CHARS: usize = 100;

/// Body of `POST /evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvaluateRequest {
    pub user_german: String,
    pub flashcard_id: i64,
}

impl EvaluateRequest {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the answer exceeds
    /// [`MAX_ANSWER_CHARS`].
    pub fn validate(&self) -> Result<(), CoreError> {
        let chars = self.user_german.chars().count();
        if chars > MAX_ANSWER_CHARS {
            return Err(CoreError::Validation(format!(
                "user_german must be at most {MAX_ANSWER_CHARS} characters, got {chars}"
            )));
        }
        Ok(())
    }
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FindingEntry {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub message: String,
    pub spans: Option<Vec<usize>>,
    pub blocking: bool,
    pub details: Option<Value>,
    pub priority: u8,
}

impl From<GrammarFinding> for FindingEntry {
    fn from(finding: GrammarFinding) -> Self {
        Self {
            kind: finding.kind,
            message: finding.message,
            spans: finding.spans,
            blocking: finding.blocking,
            details: finding.details,
            priority: finding.priority,
        }
    }
}

/// Response of `POST /evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluationResponse {
    pub meaning_conveyed: bool,
    pub correct_sentence: String,
    pub tokens: Vec<String>,
    pub errors: Vec<FindingEntry>,
}

impl From<EvaluationOutcome> for EvaluationResponse {
    fn from(outcome: EvaluationOutcome) -> Self {
        Self {
            meaning_conveyed: outcome.meaning_conveyed,
            correct_sentence: outcome.correct_sentence,
            tokens: outcome.tokens,
            errors: outcome.findings.into_iter().map(FindingEntry::from).collect(),
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn response_serializes_with_wire_field_names() {
        let outcome = EvaluationOutcome::graded(
            "Ich bin gestern nach Hause gegangen.",
            vec!["Ich".into(), "habe".into()],
            vec![
                GrammarFinding::new(FindingKind::PerfektAuxiliary, "use sein")
                    .at(1)
                    .with_details(json!("SEIN_ERROR")),
                GrammarFinding::new(FindingKind::NearMiss, "close"),
            ],
        );
        let value = serde_json::to_value(EvaluationResponse::from(outcome)).unwrap();

        assert_eq!(
            value,
            json!({
                "meaning_conveyed": false,
                "correct_sentence": "Ich bin gestern nach Hause gegangen.",
                "tokens": ["Ich", "habe"],
                "errors": [
                    {"type": "perfekt_auxiliary", "message": "use sein", "spans": [1],
                     "blocking": false, "details": "SEIN_ERROR", "priority": 30},
                    {"type": "near_miss", "message": "close", "spans": null,
                     "blocking": false, "details": null, "priority": 5}
                ]
            })
        );
    }

    #[test]
    fn overlong_answer_fails_validation() {
        let request = EvaluateRequest {
            user_german: "a".repeat(MAX_ANSWER_CHARS + 1),
            flashcard_id: 1,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn umlauts_count_as_single_characters() {
        let request = EvaluateRequest {
            user_german: "ä".repeat(MAX_ANSWER_CHARS),
            flashcard_id: 1,
        };
        assert!(request.validate().is_ok());
    }
}
