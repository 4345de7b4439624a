//! Anki package (`.apkg`) export.
//!
//! A package is a zip archive holding a SQLite collection and a media
//! manifest. Each deck becomes a parent deck plus one `Deck::SubDeck` per
//! sub-deck, with one two-field note per card.

pub mod collection;
pub mod error;
pub mod guid;
pub mod model;
pub mod schema;
pub mod writer;

pub use error::PackageError;
pub use model::NoteModel;
pub use writer::Exporter;
