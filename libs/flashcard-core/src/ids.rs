//! Identifier generation for decks, sub-decks and cards.

use rand::Rng;
use std::collections::HashSet;

/// Smallest identifier handed out by [`generate_identifier`].
pub const MIN_IDENTIFIER: i64 = 999_999_999;

/// Width of the identifier range.
pub const IDENTIFIER_SPAN: i64 = 1_000_000_000;

/// Generate a large random identifier, e.g. 1607392319.
pub fn generate_identifier() -> i64 {
    MIN_IDENTIFIER + rand::thread_rng().gen_range(0..IDENTIFIER_SPAN)
}

/// Source of identifiers for one build.
pub trait IdSource {
    /// Next identifier, never repeated within this source.
    fn next_id(&mut self) -> i64;
}

/// Random identifiers, unique for the lifetime of the source.
#[derive(Debug, Default)]
pub struct RandomIds {
    issued: HashSet<i64>,
}

impl RandomIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> i64 {
        loop {
            let id = generate_identifier();
            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

/// Deterministic counter, for tests and reproducible output.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(first: i64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identifier_in_range() {
        for _ in 0..1000 {
            let id = generate_identifier();
            assert!(id >= MIN_IDENTIFIER);
            assert!(id < MIN_IDENTIFIER + IDENTIFIER_SPAN);
        }
    }

    #[test]
    fn random_ids_are_unique() {
        let mut ids = RandomIds::new();
        let drawn: HashSet<i64> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 500);
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
        assert_eq!(ids.next_id(), 12);
    }
}
