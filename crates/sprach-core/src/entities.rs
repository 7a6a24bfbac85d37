//! Flashcard entities served by the HTTP API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::GrammarFocus;
use crate::errors::CoreError;

const PROMPT_MIN_CHARS: usize = 10;
const PROMPT_MAX_CHARS: usize = 256;

/// A practice card: an English prompt and its ideal German translation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Flashcard {
    pub flashcard_id: i64,
    pub english_prompt: String,
    pub target_german: String,
    pub grammar_focus: GrammarFocus,
}

/// Body of `POST /flashcards`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FlashcardCreate {
    pub english_prompt: String,
    pub target_german: String,
    pub grammar_focus: GrammarFocus,
}

/// Body of `POST /flashcards/{id}`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FlashcardUpdate {
    #[serde(default)]
    pub english_prompt: Option<String>,
    #[serde(default)]
    pub target_german: Option<String>,
    #[serde(default)]
    pub grammar_focus: Option<GrammarFocus>,
}

fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    let chars = prompt.chars().count();
    if (PROMPT_MIN_CHARS..=PROMPT_MAX_CHARS).contains(&chars) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "english_prompt must be {PROMPT_MIN_CHARS}..={PROMPT_MAX_CHARS} characters, got {chars}"
        )))
    }
}

impl FlashcardCreate {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the prompt length is out of range.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_prompt(&self.english_prompt)
    }

    #[must_use]
    pub fn into_flashcard(self, flashcard_id: i64) -> Flashcard {
        Flashcard {
            flashcard_id,
            english_prompt: self.english_prompt,
            target_german: self.target_german,
            grammar_focus: self.grammar_focus,
        }
    }
}

impl FlashcardUpdate {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when a new prompt is out of range.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.english_prompt.as_deref().map_or(Ok(()), validate_prompt)
    }

    pub fn apply(self, card: &mut Flashcard) {
        if let Some(prompt) = self.english_prompt {
            card.english_prompt = prompt;
        }
        if let Some(target) = self.target_german {
            card.target_german = target;
        }
        if let Some(focus) = self.grammar_focus {
            card.grammar_focus = focus;
        }
    }
}
