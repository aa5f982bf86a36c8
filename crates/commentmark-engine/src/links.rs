//! Classification and rendering of documentation cross-references.

use std::sync::LazyLock;

use commentmark_format::plain_text;
use regex::Regex;

use crate::comment::DocRef;
use crate::symbols::SymbolLookup;

/// Default documentation browser for symbols living in other packages.
pub const DEFAULT_SYMBOL_HOST: &str = "https://pkg.go.dev";

/// Runs of whitespace become single dashes in anchor slugs.
static ANCHOR_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("anchor whitespace pattern"));

/// Everything that is not a letter, digit, underscore or dash gets stripped
/// from anchor slugs.
static ANCHOR_ILLEGAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\pL\d_-]+").expect("anchor character pattern"));

/// Where a cross-reference points, as decided by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A symbol within the current type; links to a heading on this page.
    Local { anchor: String },
    /// A symbol elsewhere in the current package; same anchor form as
    /// [`LinkTarget::Local`], different originating node.
    SamePackage { anchor: String },
    /// A symbol or package outside the current package; links to the
    /// documentation browser.
    External {
        import_path: String,
        name: Option<String>,
    },
    /// No resolvable target. Renders as plain display text.
    Broken,
}

/// Classifies a cross-reference against the symbol lookup. Pure function of
/// the reference's import path, name and the lookup callbacks.
pub fn classify(doc_ref: &DocRef, lookup: &dyn SymbolLookup) -> LinkTarget {
    // Reference within the current type, e.g. [Volume].
    if doc_ref.import_path.is_empty() {
        if lookup.symbol_exists("", &doc_ref.name) {
            return LinkTarget::Local {
                anchor: type_anchor(&doc_ref.name),
            };
        }
        return LinkTarget::Broken;
    }

    // Reference within the same package, e.g. [core.Volume].
    if lookup.is_current_package(&doc_ref.import_path) {
        return LinkTarget::SamePackage {
            anchor: type_anchor(&doc_ref.name),
        };
    }

    // Reference to another package, e.g. [os.File] or [math/rand].
    let name = (!doc_ref.name.is_empty()).then(|| doc_ref.name.clone());
    LinkTarget::External {
        import_path: doc_ref.import_path.clone(),
        name,
    }
}

/// Renders a classified cross-reference as `text(target)`, or just the text
/// when the reference is broken. Final link markup is the template layer's
/// concern.
pub fn render(doc_ref: &DocRef, target: &LinkTarget, symbol_host: &str) -> String {
    match target {
        LinkTarget::Local { anchor } | LinkTarget::SamePackage { anchor } => {
            format!("{}(#{anchor})", doc_ref.text)
        }
        LinkTarget::External {
            import_path,
            name: Some(name),
        } => format!("{}({symbol_host}/{import_path}#{name})", doc_ref.text),
        LinkTarget::External {
            import_path,
            name: None,
        } => format!("{}({symbol_host}/{import_path})", doc_ref.text),
        LinkTarget::Broken => doc_ref.text.clone(),
    }
}

/// Derives the anchor slug for a rendered heading: reduce to plain text,
/// lowercase, trim, whitespace runs to dashes, strip everything that is not a
/// letter, digit, underscore or dash.
///
/// Deterministic by construction. Two distinct headings can still collide;
/// no numeric disambiguation is attempted.
pub fn anchor_slug(heading: &str) -> String {
    let reduced = plain_text(heading);
    let lowered = reduced.to_lowercase();
    let dashed = ANCHOR_WHITESPACE.replace_all(lowered.trim(), "-");
    ANCHOR_ILLEGAL.replace_all(&dashed, "").into_owned()
}

/// Anchor for the heading a type's documentation renders under.
fn type_anchor(name: &str) -> String {
    anchor_slug(&format!("Type {name}"))
}
