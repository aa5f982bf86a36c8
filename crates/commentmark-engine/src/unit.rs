//! Documentation units: one documented symbol with its comment, declaration
//! and examples.
//!
//! The declaration text is rendered by the host parser (with doc comments
//! already stripped) and arrives here as a plain string, as does the parsed
//! comment tree.

use serde::{Deserialize, Serialize};

use crate::comment::CommentBlock;
use crate::document::{Document, RenderConfig};
use crate::symbols::SymbolLookup;
use crate::text::{extract_summary, split_camel};

/// What kind of symbol a [`DocUnit`] documents. Decides the heading label the
/// unit's title carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Package,
    Type,
    Field,
    Func,
}

impl UnitKind {
    fn label(self) -> &'static str {
        match self {
            UnitKind::Package => "Package",
            UnitKind::Type => "Type",
            UnitKind::Field => "Field",
            UnitKind::Func => "Func",
        }
    }
}

/// Documentation for a single symbol: its name, raw comment text, the parsed
/// comment tree and the declaration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocUnit {
    name: String,
    kind: UnitKind,
    doc_text: String,
    doc_tree: Vec<CommentBlock>,
    decl: String,
}

impl DocUnit {
    pub fn new(
        name: impl Into<String>,
        kind: UnitKind,
        doc_text: impl Into<String>,
        doc_tree: Vec<CommentBlock>,
        decl: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            doc_text: doc_text.into(),
            doc_tree,
            decl: decl.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The formatted name of the unit, primarily for generating headers.
    /// Type units produce the `"Type {name}"` form that local link anchors
    /// are derived from.
    pub fn title(&self) -> String {
        format!("{} {}", self.kind.label(), self.name)
    }

    /// The one-sentence summary of the unit's documentation comment.
    pub fn summary(&self) -> String {
        extract_summary(&self.doc_text)
    }

    /// The structured contents of the documentation comment, rendered one
    /// heading level deeper than the unit's own heading.
    pub fn doc(&self, cfg: &RenderConfig, lookup: &dyn SymbolLookup) -> Document {
        Document::new(&cfg.inc(1), &self.doc_tree, lookup)
    }

    /// The raw text of the unit's declaration, as rendered by the host
    /// parser with attached comments stripped.
    pub fn decl(&self) -> &str {
        &self.decl
    }

    /// Filters the provided examples down to the ones pertaining to this
    /// unit: an example named exactly after the unit is its unnamed example,
    /// and `{name}_{suffix}` examples keep the suffix as their name.
    pub fn examples(&self, all: &[ExampleDoc]) -> Vec<Example> {
        let underscore_prefix = format!("{}_", self.name);

        all.iter()
            .filter_map(|example| {
                let name = if example.name == self.name {
                    String::new()
                } else if let Some(suffix) = example.name.strip_prefix(&underscore_prefix) {
                    suffix.to_string()
                } else {
                    return None;
                };

                Some(Example {
                    name,
                    doc: example.clone(),
                })
            })
            .collect()
    }
}

/// An example as supplied by the host parser: its full name, comment text,
/// parsed comment tree and code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDoc {
    pub name: String,
    pub doc_text: String,
    pub doc_tree: Vec<CommentBlock>,
    pub code: String,
}

/// An example attached to a specific unit, with its name reduced to the
/// suffix that distinguishes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    name: String,
    doc: ExampleDoc,
}

impl Example {
    /// The suffix distinguishing this example, empty for a unit's unnamed
    /// example.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heading text for the example: `"Example"`, or with the camel-split
    /// suffix in parentheses when the example is named.
    pub fn title(&self) -> String {
        if self.name.is_empty() {
            return "Example".to_string();
        }

        format!("Example ({})", split_camel(&self.name))
    }

    /// The one-sentence summary of the example's documentation comment.
    pub fn summary(&self) -> String {
        extract_summary(&self.doc.doc_text)
    }

    /// The structured contents of the example's documentation comment.
    pub fn doc(&self, cfg: &RenderConfig, lookup: &dyn SymbolLookup) -> Document {
        Document::new(&cfg.inc(1), &self.doc.doc_tree, lookup)
    }

    /// The example's code.
    pub fn code(&self) -> &str {
        &self.doc.code
    }
}
