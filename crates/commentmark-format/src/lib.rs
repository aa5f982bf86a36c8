//! Dialect-level primitives for rendering documentation text as Markdown.
//!
//! Everything in this crate is a pure string transformation: formatters take
//! already-resolved plain text and wrap it in the Markdown construct they are
//! named after, escaping special characters where the construct requires it.
//! The one exception to totality is [`header`], which rejects levels below 1.

pub mod escape;
pub mod plain;
pub mod primitives;

pub use escape::escape;
pub use plain::plain_text;
pub use primitives::{
    FormatError, accordion, accordion_header, accordion_terminator, bold, code_block,
    fenced_code_block, header, link, list_entry, paragraph,
};
