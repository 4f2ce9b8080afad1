//! Test fixtures and factory functions for creating test data.

use autoquiz_addon::service::{CardPoolLoader, Result};
use quiz_core::types::Card;

/// Generate a deck with numbered questions and distinct answers.
pub fn sample_cards(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| Card {
            id: i as i64 + 1,
            front: format!("Question {}?", i + 1),
            back: format!("Answer {}.", i + 1),
            tags: Vec::new(),
        })
        .collect()
}

/// Attach a tag to the card with the given id.
pub fn tag_card(cards: &mut [Card], id: i64, tag: &str) {
    let card = cards
        .iter_mut()
        .find(|c| c.id == id)
        .expect("card id present in fixture deck");
    card.tags.push(tag.to_string());
}

/// In-memory card loader honoring the excluded-tags contract.
pub struct StaticLoader {
    cards: Vec<Card>,
}

impl StaticLoader {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CardPoolLoader for StaticLoader {
    fn load_deck(&self, _deck_id: &str, excluded_tags: &[String]) -> Result<Vec<Card>> {
        Ok(self
            .cards
            .iter()
            .filter(|card| !card.tags.iter().any(|tag| excluded_tags.contains(tag)))
            .cloned()
            .collect())
    }
}
