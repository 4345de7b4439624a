//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using BuildError.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while turning an outline into a deck.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("missing deck heading: the outline needs a level-1 heading")]
    MissingDeckHeading,

    #[error("empty deck name at line {line}")]
    EmptyDeckName { line: usize },

    #[error("card \"{front}\" at line {line} has no answer list")]
    MissingAnswer { front: String, line: usize },

    #[error("card \"{front}\" at line {line} has an empty answer list")]
    EmptyAnswer { front: String, line: usize },

    #[error("no list to format")]
    MissingList,
}
