//! Core types for deck building.

use serde::{Deserialize, Serialize};

/// Top-level deck, named by the outline's level-1 heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sub_decks: Vec<SubDeck>,
}

impl Deck {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sub_decks: Vec::new(),
        }
    }

    pub fn add_sub_deck(&mut self, sub_deck: SubDeck) {
        self.sub_decks.push(sub_deck);
    }

    /// Sanitized name used for the package file: spaces become hyphens, lower-cased.
    pub fn file_name(&self) -> String {
        self.name.replace(' ', "-").to_lowercase()
    }

    /// Total number of cards across all sub-decks.
    pub fn card_count(&self) -> usize {
        self.sub_decks.iter().map(|s| s.cards.len()).sum()
    }
}

/// Named grouping of cards, from a level-2 heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDeck {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl SubDeck {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Name under the parent deck, using `::` as the hierarchy separator.
    pub fn qualified_name(&self, deck: &Deck) -> String {
        format!("{}::{}", deck.name, self.name)
    }
}

/// Question/answer pair. The front is a level-3 heading, the back its formatted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Card {
    pub fn new(id: i64, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id,
            front: front.into(),
            back: back.into(),
            tags: Vec::new(),
        }
    }
}
