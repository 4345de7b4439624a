//! Core deck-building library for markdown outlines.
//!
//! Provides:
//! - Outline parser (headings and unordered lists)
//! - List formatter for card answers
//! - Walker mapping headings to deck / sub-deck / card
//! - Identifier generation
//! - Shared types (Deck, SubDeck, Card)

pub mod error;
pub mod formatter;
pub mod ids;
pub mod outline;
pub mod types;
pub mod walker;

pub use error::{BuildError, Result};
pub use formatter::format_list;
pub use ids::{generate_identifier, IdSource, RandomIds, SequentialIds};
pub use outline::{parse_outline, Block, ListFragment, ListItem};
pub use types::{Card, Deck, SubDeck};
pub use walker::{build_deck, build_deck_with, walk, walk_with, BuildEvent};
