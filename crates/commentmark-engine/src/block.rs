//! Output model: render-ready block elements produced by the document builder.

use serde::Serialize;

/// Identifies the type of block element represented by the corresponding
/// [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A paragraph of text.
    Paragraph,
    /// A section of preformatted code.
    Code,
    /// A section header.
    Header,
    /// An ordered or unordered list.
    List,
}

/// A single block element in the documentation for a symbol or package.
///
/// Exactly one of [`Block::text`] (non-list kinds) or [`Block::list`] (list
/// kind) carries the contents. Blocks are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    kind: BlockKind,
    text: String,
    list: Option<List>,
    level: usize,
    inline: bool,
}

impl Block {
    /// Creates a new block element of the provided kind with the given text
    /// contents, rendering at the given header level, and a flag indicating
    /// whether this block is part of an inline element.
    pub fn new(kind: BlockKind, text: impl Into<String>, level: usize, inline: bool) -> Self {
        Self {
            kind,
            text: text.into(),
            list: None,
            level,
            inline,
        }
    }

    /// Creates a new list block element with the given list contents.
    pub fn new_list(list: List, level: usize, inline: bool) -> Self {
        Self {
            kind: BlockKind::List,
            text: String::new(),
            list: Some(list),
            level,
            inline,
        }
    }

    /// The kind of data this block's contents should be interpreted as.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// The raw text of the block's contents. Pre-scrubbed as determined by
    /// the block's kind, but not wrapped in any rendering construct. Empty
    /// for list blocks.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The list contents. Only present for blocks of kind
    /// [`BlockKind::List`].
    pub fn list(&self) -> Option<&List> {
        self.list.as_ref()
    }

    /// The level a block of kind [`BlockKind::Header`] renders at, saturated
    /// to 6 by the header formatter. Unused for other kinds.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether the block is part of an inline element, such as a list item.
    pub fn inline(&self) -> bool {
        self.inline
    }
}

/// The rendered contents of a list block, items in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    ordered: bool,
    items: Vec<ListItem>,
}

impl List {
    pub fn new(ordered: bool, items: Vec<ListItem>) -> Self {
        Self { ordered, items }
    }

    /// Whether items render with numbers rather than bullets.
    pub fn ordered(&self) -> bool {
        self.ordered
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }
}

/// One rendered list item: an ordered sequence of blocks, so items can hold
/// several paragraphs or a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    blocks: Vec<Block>,
}

impl ListItem {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
