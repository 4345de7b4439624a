//! Markdown outline parser.
//!
//! Flattens a markdown document into the top-level blocks the walker cares
//! about: headings and unordered lists. Everything else is kept as an
//! [`Block::Other`] marker so the walker can tell what sits between a card
//! heading and its list.
//!
//! ```markdown
//! # Deck Name
//!
//! ## Sub Deck
//!
//! ### Question
//!
//! - Content
//! - In the
//! - Answers
//! ```

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A top-level element of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
        line: usize,
    },
    List(ListFragment),
    /// Paragraphs, code, quotes, ordered lists, rules and anything else.
    Other { line: usize },
}

impl Block {
    /// 1-based source line where the block starts.
    pub fn line(&self) -> usize {
        match self {
            Self::Heading { line, .. } | Self::Other { line } => *line,
            Self::List(list) => list.line,
        }
    }
}

/// An unordered list with at most one level of nesting kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFragment {
    pub items: Vec<ListItem>,
    pub line: usize,
}

/// One list item: its own text plus the texts of items nested directly under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub children: Vec<String>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(text: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse markdown into a flat sequence of top-level blocks.
pub fn parse_outline(markdown: &str) -> Vec<Block> {
    let lines = LineIndex::new(markdown);
    let mut builder = OutlineBuilder::new();

    for (event, range) in Parser::new_ext(markdown, Options::empty()).into_offset_iter() {
        builder.process_event(event, lines.line_of(range.start));
    }

    builder.blocks
}

/// Maps byte offsets to 1-based line numbers.
struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        Self {
            newlines: text.match_indices('\n').map(|(idx, _)| idx).collect(),
        }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }
}

enum Capture {
    Idle,
    Heading { level: u8, line: usize, text: String },
    List { fragment: ListFragment, depth: usize },
    Skip,
}

struct OutlineBuilder {
    blocks: Vec<Block>,
    capture: Capture,
    depth: usize,
}

impl OutlineBuilder {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            capture: Capture::Idle,
            depth: 0,
        }
    }

    fn process_event(&mut self, event: Event<'_>, line: usize) {
        match event {
            Event::Start(tag) => {
                if self.depth == 0 {
                    self.begin_block(&tag, line);
                } else {
                    self.nested_start(&tag);
                }
                self.depth += 1;
            }
            Event::End(tag) => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.finish_block();
                } else {
                    self.nested_end(tag);
                }
            }
            Event::Text(text) | Event::Code(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_text("\n"),
            Event::Rule if self.depth == 0 => self.blocks.push(Block::Other { line }),
            _ => {}
        }
    }

    fn begin_block(&mut self, tag: &Tag<'_>, line: usize) {
        self.capture = match tag {
            Tag::Heading { level, .. } => Capture::Heading {
                level: heading_level_to_int(*level),
                line,
                text: String::new(),
            },
            Tag::List(None) => Capture::List {
                fragment: ListFragment {
                    items: Vec::new(),
                    line,
                },
                depth: 1,
            },
            _ => {
                self.blocks.push(Block::Other { line });
                Capture::Skip
            }
        };
    }

    fn nested_start(&mut self, tag: &Tag<'_>) {
        let Capture::List { fragment, depth } = &mut self.capture else {
            return;
        };

        match tag {
            Tag::List(_) => *depth += 1,
            Tag::Item if *depth == 1 => fragment.items.push(ListItem::default()),
            Tag::Item if *depth == 2 => {
                if let Some(item) = fragment.items.last_mut() {
                    item.children.push(String::new());
                }
            }
            Tag::Item => {
                // Deeper items are folded into the enclosing child.
                if let Some(child) = fragment.items.last_mut().and_then(|i| i.children.last_mut()) {
                    if !child.trim().is_empty() {
                        child.push(' ');
                    }
                }
            }
            _ => {}
        }
    }

    fn nested_end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::List(_) => {
                if let Capture::List { depth, .. } = &mut self.capture {
                    *depth = depth.saturating_sub(1);
                }
            }
            TagEnd::Paragraph if matches!(self.capture, Capture::List { .. }) => {
                self.push_text("\n")
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        match &mut self.capture {
            Capture::Heading { text: heading, .. } => heading.push_str(text),
            Capture::List { fragment, depth } => {
                let Some(item) = fragment.items.last_mut() else {
                    return;
                };
                if *depth <= 1 {
                    item.text.push_str(text);
                } else {
                    if item.children.is_empty() {
                        item.children.push(String::new());
                    }
                    if let Some(child) = item.children.last_mut() {
                        child.push_str(text);
                    }
                }
            }
            Capture::Idle | Capture::Skip => {}
        }
    }

    fn finish_block(&mut self) {
        match std::mem::replace(&mut self.capture, Capture::Idle) {
            Capture::Heading { level, line, text } => self.blocks.push(Block::Heading {
                level,
                text: text.trim().to_string(),
                line,
            }),
            Capture::List { mut fragment, .. } => {
                for item in &mut fragment.items {
                    item.text = item.text.trim().to_string();
                    for child in &mut item.children {
                        *child = child.trim().to_string();
                    }
                }
                self.blocks.push(Block::List(fragment));
            }
            Capture::Idle | Capture::Skip => {}
        }
    }
}

fn heading_level_to_int(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
