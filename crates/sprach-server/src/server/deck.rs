//! In-memory flashcard deck.
//!
//! Loaded once at startup; mutations live for the lifetime of the process.

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Context;
use sprach_core::entities::{Flashcard, FlashcardCreate, FlashcardUpdate};

const BUILTIN_DECK: &str = include_str!("../../data/flashcards.json");

#[derive(Debug, Default)]
pub struct Deck {
    cards: RwLock<Vec<Flashcard>>,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards: RwLock::new(cards),
        }
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::parse(BUILTIN_DECK).context("built-in deck is invalid")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read deck {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid deck {}", path.display()))
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        let cards: Vec<Flashcard> = serde_json::from_str(text)?;
        Ok(Self::new(cards))
    }

    /// All cards, or the first `first_n` when given and non-zero.
    pub fn list(&self, first_n: Option<usize>) -> Vec<Flashcard> {
        let cards = self.read();
        match first_n {
            Some(n) if n > 0 => cards.iter().take(n).cloned().collect(),
            _ => cards.clone(),
        }
    }

    pub fn get(&self, id: i64) -> Option<Flashcard> {
        self.read().iter().find(|c| c.flashcard_id == id).cloned()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Target sentences of every card.
    pub fn targets(&self) -> Vec<String> {
        self.read().iter().map(|c| c.target_german.clone()).collect()
    }

    /// Append a card with id one above the current maximum.
    pub fn create(&self, card: FlashcardCreate) -> Flashcard {
        let mut cards = self.write();
        let id = cards.iter().map(|c| c.flashcard_id).max().unwrap_or(0) + 1;
        let card = card.into_flashcard(id);
        cards.push(card.clone());
        card
    }

    pub fn update(&self, id: i64, update: FlashcardUpdate) -> Option<Flashcard> {
        let mut cards = self.write();
        let card = cards.iter_mut().find(|c| c.flashcard_id == id)?;
        update.apply(card);
        Some(card.clone())
    }

    pub fn delete(&self, id: i64) -> Option<Flashcard> {
        let mut cards = self.write();
        let position = cards.iter().position(|c| c.flashcard_id == id)?;
        Some(cards.remove(position))
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Flashcard>> {
        self.cards.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Flashcard>> {
        self.cards.write().unwrap_or_else(PoisonError::into_inner)
    }
}
