//! Answer text formatting for card lists.
//!
//! # Shapes
//! ```markdown
//! - Top Level Note
//!     - Sub Note
//!     - Sub Note
//! ```
//! renders as `"Top Level Note\n\t- Sub Note\n\t- Sub Note\n"`, while a flat
//! list
//! ```markdown
//! - Top Level Note
//! - Top Level Note
//! ```
//! renders one line per item.
//!
//! Sub-notes come only from markdown nesting. A flat list never promotes its
//! first item to the note with the siblings as sub-notes: `- Top`, `- A`,
//! `- B` renders as `"Top\nA\nB\n"`, not `"Top\n\t- A\n\t- B\n"`.

use crate::error::{BuildError, Result};
use crate::outline::ListFragment;

/// Prefix for sub-notes nested under a top-level note.
pub const SUB_NOTE_PREFIX: &str = "\t- ";

/// Render a list into answer text.
pub fn format_list(list: Option<&ListFragment>) -> Result<String> {
    let list = list.ok_or(BuildError::MissingList)?;
    let mut formatted = String::new();

    for item in &list.items {
        let note = item.text.trim_end_matches('\n');
        if !note.is_empty() {
            formatted.push_str(note);
            formatted.push('\n');
        }
        for sub_note in &item.children {
            formatted.push_str(SUB_NOTE_PREFIX);
            formatted.push_str(sub_note);
            formatted.push('\n');
        }
    }

    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{parse_outline, Block, ListItem};

    fn fragment(items: Vec<ListItem>) -> ListFragment {
        ListFragment { items, line: 1 }
    }

    #[test]
    fn nested_items_become_sub_notes() {
        let list = fragment(vec![ListItem::with_children("Top", ["A", "B"])]);
        assert_eq!(format_list(Some(&list)).unwrap(), "Top\n\t- A\n\t- B\n");
    }

    #[test]
    fn flat_items_are_top_level_notes() {
        let list = fragment(vec![ListItem::new("A"), ListItem::new("B")]);
        assert_eq!(format_list(Some(&list)).unwrap(), "A\nB\n");
    }

    #[test]
    fn trailing_newlines_stripped_from_note() {
        let list = fragment(vec![ListItem::with_children("Top\n\n\n", ["A"])]);
        assert_eq!(format_list(Some(&list)).unwrap(), "Top\n\t- A\n");
    }

    #[test]
    fn mixed_items_keep_order() {
        let list = fragment(vec![
            ListItem::new("First"),
            ListItem::with_children("Second", ["detail"]),
            ListItem::new("Third"),
        ]);
        assert_eq!(
            format_list(Some(&list)).unwrap(),
            "First\nSecond\n\t- detail\nThird\n"
        );
    }

    #[test]
    fn missing_list_is_error() {
        assert!(matches!(format_list(None), Err(BuildError::MissingList)));
    }

    #[test]
    fn empty_list_formats_to_empty_string() {
        let list = fragment(vec![ListItem::new("")]);
        assert_eq!(format_list(Some(&list)).unwrap(), "");
    }

    #[test]
    fn flat_siblings_are_not_sub_notes() {
        let blocks = parse_outline("- Top\n- A\n- B\n");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list, got {:?}", blocks[0]);
        };
        assert_eq!(format_list(Some(list)).unwrap(), "Top\nA\nB\n");
    }

    #[test]
    fn format_parsed_markdown() {
        let blocks = parse_outline("- Ownership\n  - one owner\n  - dropped at scope end\n");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list, got {:?}", blocks[0]);
        };
        assert_eq!(
            format_list(Some(list)).unwrap(),
            "Ownership\n\t- one owner\n\t- dropped at scope end\n"
        );
    }
}
