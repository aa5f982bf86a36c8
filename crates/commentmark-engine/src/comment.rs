//! Input model: the abstract comment tree handed over by the host parser.
//!
//! The tree is already split into block-level nodes, and paragraph/heading
//! nodes carry their inline spans in source order. Nothing here is rendered
//! yet; [`crate::Document`] does that.

use serde::{Deserialize, Serialize};

/// One block-level node of a documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentBlock {
    /// Running text, possibly wrapped over several source lines.
    Paragraph(Vec<Inline>),
    /// A section heading within the comment.
    Heading(Vec<Inline>),
    /// Preformatted text, kept verbatim.
    Code(String),
    /// An ordered or unordered list.
    List(CommentList),
}

/// A list node with its items in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentList {
    /// Whether items should render with numbers rather than bullets.
    pub ordered: bool,
    pub items: Vec<CommentItem>,
}

/// One list item. Items can hold multiple blocks (multi-paragraph items,
/// nested lists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentItem {
    pub blocks: Vec<CommentBlock>,
}

/// One inline span within a paragraph or heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text, copied through verbatim.
    Plain(String),
    /// Emphasized text. Emphasis markers are applied by a higher layer, so
    /// the contents pass through unchanged here.
    Emphasis(String),
    /// An explicit link with both text and URL spelled out in the comment.
    Link { text: String, url: String },
    /// A cross-reference to another documented symbol.
    DocRef(DocRef),
}

/// A documentation cross-reference, e.g. `[Volume]` or `[os.File]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRef {
    /// Import path of the referenced package. Empty when the reference stays
    /// within the current symbol's own type.
    pub import_path: String,
    /// Name of the referenced symbol. Empty when the reference points at a
    /// whole package.
    pub name: String,
    /// The display text of the reference as written in the comment.
    pub text: String,
}
