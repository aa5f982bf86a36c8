use thiserror::Error;

use crate::escape::escape;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("header level cannot be less than 1 (got {0})")]
    InvalidLevel(usize),
}

/// Converts the provided text to bold. Empty input stays empty rather than
/// producing a bare `****` marker.
pub fn bold(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    format!("**{}**", escape(text))
}

/// Converts the provided text into a header of the provided level. Levels
/// above 6 render as level 6; levels below 1 are an error.
pub fn header(level: usize, text: &str) -> Result<String, FormatError> {
    match level {
        0 => Err(FormatError::InvalidLevel(level)),
        1..=5 => Ok(format!("{} {text}", "#".repeat(level))),
        // Only go up to 6 levels. Anything higher is also level 6.
        _ => Ok(format!("###### {text}")),
    }
}

/// Generates a link with the given text and href values. The href is wrapped
/// in angle brackets so spaces and other special characters survive without
/// further escaping. An empty href degrades to the bare text.
pub fn link(text: &str, href: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if href.is_empty() {
        return text.to_string();
    }

    format!("[{text}](<{href}>)")
}

/// Generates an unordered list entry with the provided text at the provided
/// zero-indexed depth. A depth of 0 is the topmost level of list.
///
/// An empty entry renders as nothing at all; existing callers rely on this.
pub fn list_entry(depth: usize, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    format!("{}- {text}", "  ".repeat(depth))
}

/// Wraps the provided code as an indented code block. Language syntax
/// highlighting is not supported by this form.
pub fn code_block(code: &str) -> String {
    code.split('\n')
        .map(|line| format!("\t{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps the provided code as a fenced code block tagged with the provided
/// language (or no language if the empty string is provided).
pub fn fenced_code_block(language: &str, code: &str) -> String {
    format!("```{language}\n{}\n```", code.trim())
}

/// Generates collapsible content. The visible title while collapsed is the
/// provided title and the expanded content is the body.
pub fn accordion(title: &str, body: &str) -> String {
    format!(
        "<details><summary>{title}</summary>\n<p>{}</p>\n</details>",
        escape(body)
    )
}

/// Generates the header visible when an accordion is collapsed.
///
/// Expected to be used together with [`accordion_terminator`] when the body
/// has to be produced by a separate rendering pass:
///
/// ```
/// use commentmark_format::{accordion_header, accordion_terminator};
///
/// let rendered = accordion_header("Title") + "Body" + accordion_terminator();
/// ```
pub fn accordion_header(title: &str) -> String {
    format!("<details><summary>{title}</summary>\n<p>")
}

/// Generates the text necessary to terminate an accordion after the body.
/// See [`accordion_header`].
pub fn accordion_terminator() -> &'static str {
    "</p>\n</details>"
}

/// Formats a paragraph with the provided text as the contents.
pub fn paragraph(text: &str) -> String {
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn bold_empty_is_empty() {
        assert_eq!(bold(""), "");
    }

    #[test]
    fn bold_escapes_contents() {
        assert_eq!(bold("a*b"), r"**a\*b**");
    }

    #[rstest]
    #[case(1, "# title")]
    #[case(2, "## title")]
    #[case(3, "### title")]
    #[case(4, "#### title")]
    #[case(5, "##### title")]
    #[case(6, "###### title")]
    fn header_levels(#[case] level: usize, #[case] expected: &str) {
        assert_eq!(header(level, "title").unwrap(), expected);
    }

    #[test]
    fn header_clamps_above_six() {
        assert_eq!(header(7, "x").unwrap(), header(6, "x").unwrap());
    }

    #[test]
    fn header_rejects_level_zero() {
        assert_eq!(header(0, "x"), Err(FormatError::InvalidLevel(0)));
    }

    #[rstest]
    #[case("t", "", "t")]
    #[case("", "h", "")]
    #[case("t", "h", "[t](<h>)")]
    #[case("t", "h with spaces", "[t](<h with spaces>)")]
    fn link_forms(#[case] text: &str, #[case] href: &str, #[case] expected: &str) {
        assert_eq!(link(text, href), expected);
    }

    #[rstest]
    #[case(0, "", "")]
    #[case(0, "x", "- x")]
    #[case(2, "x", "    - x")]
    fn list_entry_forms(#[case] depth: usize, #[case] text: &str, #[case] expected: &str) {
        assert_eq!(list_entry(depth, text), expected);
    }

    #[test]
    fn code_block_indents_every_line() {
        assert_eq!(code_block("a\n\nb"), "\ta\n\t\n\tb");
    }

    #[test]
    fn fenced_code_block_trims_and_tags() {
        assert_eq!(
            fenced_code_block("rust", "\nfn main() {}\n"),
            "```rust\nfn main() {}\n```"
        );
    }

    #[test]
    fn fenced_code_block_allows_untagged_fence() {
        assert_eq!(fenced_code_block("", "x"), "```\nx\n```");
    }

    #[test]
    fn accordion_split_form_matches_single_call() {
        let single = accordion("Title", "Body");
        let split = accordion_header("Title") + &escape("Body") + accordion_terminator();
        assert_eq!(single, split);
    }

    #[test]
    fn paragraph_is_identity() {
        assert_eq!(paragraph("text"), "text");
    }
}
