//! Turns an abstract documentation comment tree into an ordered sequence of
//! render-ready [`Block`]s, resolving symbol cross-references to local anchors
//! or external hyperlinks along the way.
//!
//! The comment tree itself is produced by an external parser; this crate only
//! consumes it. Downstream template assembly takes the blocks from here.

pub mod block;
pub mod comment;
pub mod document;
pub mod links;
pub mod symbols;
pub mod text;
pub mod unit;

pub use block::{Block, BlockKind, List, ListItem};
pub use comment::{CommentBlock, CommentItem, CommentList, DocRef, Inline};
pub use document::{Document, RenderConfig};
pub use links::{DEFAULT_SYMBOL_HOST, LinkTarget, anchor_slug, classify, render};
pub use symbols::{PackageIndex, SymbolLookup};
pub use text::{extract_summary, normalize_doc, split_camel};
pub use unit::{DocUnit, Example, ExampleDoc, UnitKind};
