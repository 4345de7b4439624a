//! Outline walker: headings become the deck hierarchy.
//!
//! - level 1: the deck (first one wins)
//! - level 2: a sub-deck
//! - level 3: a card, answered by the list that follows it

use crate::error::{BuildError, Result};
use crate::formatter::format_list;
use crate::ids::IdSource;
use crate::outline::{parse_outline, Block, ListFragment};
use crate::types::{Card, Deck, SubDeck};

/// An entity the walker has just created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent<'a> {
    Deck(&'a str),
    SubDeck(&'a str),
    Card(&'a str),
}

/// Parse markdown and build its deck.
pub fn build_deck(markdown: &str, ids: &mut dyn IdSource) -> Result<Deck> {
    build_deck_with(markdown, ids, &mut |_| {})
}

/// Like [`build_deck`], reporting each entity as it is created.
pub fn build_deck_with(
    markdown: &str,
    ids: &mut dyn IdSource,
    on_event: &mut dyn FnMut(BuildEvent<'_>),
) -> Result<Deck> {
    let blocks = parse_outline(markdown);
    walk_with(&blocks, ids, on_event)
}

/// Build a deck from already parsed blocks, in document order.
pub fn walk(blocks: &[Block], ids: &mut dyn IdSource) -> Result<Deck> {
    walk_with(blocks, ids, &mut |_| {})
}

/// Like [`walk`], reporting each entity as it is created. Events emitted
/// before an error still describe how far the walk got.
pub fn walk_with(
    blocks: &[Block],
    ids: &mut dyn IdSource,
    on_event: &mut dyn FnMut(BuildEvent<'_>),
) -> Result<Deck> {
    let (deck_index, name, line) = blocks
        .iter()
        .enumerate()
        .find_map(|(idx, block)| match block {
            Block::Heading { level: 1, text, line } => Some((idx, text, *line)),
            _ => None,
        })
        .ok_or(BuildError::MissingDeckHeading)?;

    if name.trim().is_empty() {
        return Err(BuildError::EmptyDeckName { line });
    }

    tracing::debug!(deck = %name, line, "deck heading");
    on_event(BuildEvent::Deck(name.as_str()));
    let mut walker = Walker::new(Deck::new(ids.next_id(), name.as_str()), deck_index, on_event);

    for (idx, block) in blocks.iter().enumerate() {
        walker.process_block(idx, block, &blocks[idx + 1..], ids)?;
    }

    Ok(walker.finish())
}

struct Walker<'e> {
    deck: Deck,
    deck_index: usize,
    current: Option<SubDeck>,
    on_event: &'e mut dyn FnMut(BuildEvent<'_>),
}

impl<'e> Walker<'e> {
    fn new(deck: Deck, deck_index: usize, on_event: &'e mut dyn FnMut(BuildEvent<'_>)) -> Self {
        Self {
            deck,
            deck_index,
            current: None,
            on_event,
        }
    }

    fn process_block(
        &mut self,
        idx: usize,
        block: &Block,
        rest: &[Block],
        ids: &mut dyn IdSource,
    ) -> Result<()> {
        let Block::Heading { level, text, line } = block else {
            return Ok(());
        };

        match *level {
            1 if idx == self.deck_index => {}
            1 => tracing::warn!(heading = %text, line, "ignoring extra level-1 heading"),
            2 => self.handle_sub_deck(text, ids),
            3 => self.handle_card(text, *line, rest, ids)?,
            _ => tracing::warn!(heading = %text, line, level, "ignoring heading below card level"),
        }
        Ok(())
    }

    fn handle_sub_deck(&mut self, name: &str, ids: &mut dyn IdSource) {
        self.flush_sub_deck();
        tracing::debug!(sub_deck = %name, "sub-deck heading");
        (self.on_event)(BuildEvent::SubDeck(name));
        self.current = Some(SubDeck::new(ids.next_id(), name));
    }

    fn handle_card(
        &mut self,
        front: &str,
        line: usize,
        rest: &[Block],
        ids: &mut dyn IdSource,
    ) -> Result<()> {
        let Some(sub_deck) = self.current.as_mut() else {
            tracing::warn!(card = %front, line, "ignoring card outside a sub-deck");
            return Ok(());
        };

        let back = format_list(answer_list(rest)).map_err(|_| BuildError::MissingAnswer {
            front: front.to_string(),
            line,
        })?;
        if back.trim().is_empty() {
            return Err(BuildError::EmptyAnswer {
                front: front.to_string(),
                line,
            });
        }

        tracing::debug!(card = %front, line, "card heading");
        sub_deck.add_card(Card::new(ids.next_id(), front, back));
        (self.on_event)(BuildEvent::Card(front));
        Ok(())
    }

    fn flush_sub_deck(&mut self) {
        if let Some(sub_deck) = self.current.take() {
            self.deck.add_sub_deck(sub_deck);
        }
    }

    fn finish(mut self) -> Deck {
        self.flush_sub_deck();
        self.deck
    }
}

/// The list answering a card: the first list before the next heading.
fn answer_list(rest: &[Block]) -> Option<&ListFragment> {
    for block in rest {
        match block {
            Block::List(list) => return Some(list),
            Block::Heading { .. } => return None,
            Block::Other { .. } => {}
        }
    }
    None
}
