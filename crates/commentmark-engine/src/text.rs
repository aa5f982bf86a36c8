//! Text utilities shared by the document builder and unit helpers.

use std::sync::LazyLock;

use regex::Regex;

static CRLF: LazyLock<Regex> = LazyLock::new(|| Regex::new("\r\n").expect("crlf pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Normalizes a raw documentation comment: CRLF line endings become LF and
/// surrounding whitespace is trimmed.
pub fn normalize_doc(doc: &str) -> String {
    CRLF.replace_all(doc, "\n").trim().to_string()
}

/// Collapses every run of whitespace to a single space. Source line wrapping
/// inside a paragraph carries no meaning, so paragraphs pass through here.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Joins the wrapped lines of a single paragraph into one line, trimming each
/// and separating them with single spaces.
pub fn format_doc_paragraph(paragraph: &str) -> String {
    paragraph
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the one-sentence summary from a documentation comment.
///
/// The summary is the first paragraph up to the first sentence boundary: a
/// space immediately following a period, unless that period terminates a
/// short capitalized token such as an initial ("J.") or an honorific
/// ("Dr."). The heuristic prefers over-long summaries to truncating in the
/// middle of a sentence. A trailing period is appended when the result is
/// non-empty and does not already end with one.
pub fn extract_summary(doc: &str) -> String {
    let normalized = normalize_doc(doc);

    // Trim to the first paragraph if there are multiple.
    let first_paragraph = match normalized.find("\n\n") {
        Some(idx) => &normalized[..idx],
        None => &normalized[..],
    };

    let chars: Vec<char> = format_doc_paragraph(first_paragraph).chars().collect();
    let mut end = chars.len();
    for i in 1..chars.len() {
        if chars[i] == ' ' && chars[i - 1] == '.' && !is_abbreviation(&chars[..i - 1]) {
            end = i;
            break;
        }
    }

    let mut summary: String = chars[..end].iter().collect();
    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }

    summary
}

/// Reports whether the text ending just before a period looks like an
/// abbreviation rather than the end of a sentence: a capitalized token of at
/// most two letters, e.g. the "J" in "J. Smith" or the "Dr" in "Dr. Smith".
fn is_abbreviation(before_period: &[char]) -> bool {
    let word_start = before_period
        .iter()
        .rposition(|c| !c.is_alphanumeric())
        .map(|i| i + 1)
        .unwrap_or(0);

    let word = &before_period[word_start..];
    matches!(word.len(), 1 | 2) && word[0].is_uppercase()
}

/// Splits a camel-cased identifier into space-separated words: a space goes
/// in at each lower-to-upper transition and before the last capital of an
/// uppercase run followed by lowercase. The first character counts as
/// uppercase regardless of its actual case.
pub fn split_camel(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut previous: Option<char> = None;
    let mut word_length = 0usize;

    for (i, c) in text.chars().enumerate() {
        if i == 0 {
            previous = Some(c.to_ascii_uppercase());
            continue;
        }

        let prev = previous.unwrap_or(' ');
        if prev.is_ascii_uppercase() && !c.is_ascii_uppercase() && word_length > 0 {
            // A capital followed by a lower begins a word: break before the
            // capital if a word is already there.
            out.push(' ');
            out.push(prev);
            word_length = 1;
        } else if !prev.is_ascii_uppercase() && c.is_ascii_uppercase() {
            // A lower followed by a capital: the capital begins a word.
            out.push(prev);
            out.push(' ');
            word_length = 0;
        } else {
            out.push(prev);
            word_length += 1;
        }

        previous = Some(c);
    }

    if let Some(prev) = previous {
        out.push(prev);
    }

    out
}
