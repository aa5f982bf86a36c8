//! Builds the ordered block sequence for one documentation comment.

use crate::block::{Block, BlockKind, List, ListItem};
use crate::comment::{CommentBlock, CommentList, Inline};
use crate::links::{self, DEFAULT_SYMBOL_HOST};
use crate::symbols::SymbolLookup;
use crate::text::collapse_whitespace;

/// Rendering context carried through a document build: the heading level
/// blocks render at and the documentation browser used for external symbol
/// links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    level: usize,
    symbol_host: String,
}

impl RenderConfig {
    /// A config rendering headers at the given base level, linking external
    /// symbols to [`DEFAULT_SYMBOL_HOST`].
    pub fn new(level: usize) -> Self {
        Self {
            level,
            symbol_host: DEFAULT_SYMBOL_HOST.to_string(),
        }
    }

    /// Overrides the documentation browser used for external symbol links.
    pub fn with_symbol_host(mut self, host: impl Into<String>) -> Self {
        self.symbol_host = host.into();
        self
    }

    /// A copy of this config with the heading level increased by `by`.
    /// Sub-documents (a field's own documentation under its type) render one
    /// level deeper via `inc(1)`.
    pub fn inc(&self, by: usize) -> Self {
        Self {
            level: self.level + by,
            symbol_host: self.symbol_host.clone(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn symbol_host(&self) -> &str {
        &self.symbol_host
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// The documentation comment contents for a package or symbol in structured,
/// render-ready form: an ordered sequence of [`Block`]s. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
    level: usize,
}

impl Document {
    /// Builds a document from the comment tree the host parser produced,
    /// resolving cross-references through the provided lookup. Sibling order
    /// of the input is preserved in the output blocks.
    pub fn new(cfg: &RenderConfig, content: &[CommentBlock], lookup: &dyn SymbolLookup) -> Self {
        Self {
            blocks: build_blocks(cfg, content, lookup, false),
            level: cfg.level,
        }
    }

    /// The block elements that make up the documentation contents.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The default level headers within the documentation render at.
    pub fn level(&self) -> usize {
        self.level
    }
}

fn build_blocks(
    cfg: &RenderConfig,
    content: &[CommentBlock],
    lookup: &dyn SymbolLookup,
    inline: bool,
) -> Vec<Block> {
    content
        .iter()
        .map(|block| match block {
            // Code renders verbatim: no escaping, no whitespace collapsing.
            CommentBlock::Code(code) => Block::new(BlockKind::Code, code.clone(), cfg.level, inline),
            CommentBlock::Heading(spans) => Block::new(
                BlockKind::Header,
                render_inlines(cfg, spans, lookup),
                cfg.level,
                inline,
            ),
            CommentBlock::Paragraph(spans) => {
                // Source line wrapping is not meaningful; collapse it away.
                let text = collapse_whitespace(&render_inlines(cfg, spans, lookup));
                Block::new(BlockKind::Paragraph, text, cfg.level, inline)
            }
            CommentBlock::List(list) => {
                Block::new_list(build_list(cfg, list, lookup), cfg.level, inline)
            }
        })
        .collect()
}

fn build_list(cfg: &RenderConfig, list: &CommentList, lookup: &dyn SymbolLookup) -> List {
    let items = list
        .items
        .iter()
        .map(|item| ListItem::new(build_blocks(cfg, &item.blocks, lookup, true)))
        .collect();

    List::new(list.ordered, items)
}

fn render_inlines(cfg: &RenderConfig, spans: &[Inline], lookup: &dyn SymbolLookup) -> String {
    let mut out = String::new();

    for span in spans {
        match span {
            Inline::Plain(text) => out.push_str(text),
            // Emphasis markers are applied by the template layer; the text
            // passes through unchanged so they are not doubled up here.
            Inline::Emphasis(text) => out.push_str(text),
            Inline::Link { text, url } => {
                out.push_str(text);
                out.push('(');
                out.push_str(url);
                out.push(')');
            }
            Inline::DocRef(doc_ref) => {
                let target = links::classify(doc_ref, lookup);
                out.push_str(&links::render(doc_ref, &target, &cfg.symbol_host));
            }
        }
    }

    out
}
