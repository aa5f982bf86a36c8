use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Characters that carry meaning in the output dialect and need a backslash
/// prefix when they appear in ordinary text.
static SPECIAL_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\\`*_{}\[\]()<>#+!~-])").expect("special character pattern"));

/// Matches a URL with an explicit scheme. Scheme-less text like
/// `example.com/page` is deliberately not matched and gets escaped normally.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[a-zA-Z][a-zA-Z0-9+.-]*://[^\s<>\[\]()\\'"`]+"#).expect("url pattern")
});

/// Escapes the special characters in the provided text, but leaves URLs found
/// intact. Only URLs that begin with a scheme skip the escaping.
///
/// Note that escaping is not idempotent: running the output through `escape`
/// again escapes the backslashes inserted by the first pass.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for url in URL_PATTERN.find_iter(text) {
        // Escape the gap before this URL, then copy the URL verbatim.
        if url.start() > cursor {
            out.push_str(&escape_raw(&text[cursor..url.start()]));
        }
        out.push_str(url.as_str());
        cursor = url.end();
    }

    // Whatever remains after the last URL still needs escaping.
    if cursor < text.len() {
        out.push_str(&escape_raw(&text[cursor..]));
    }

    out
}

fn escape_raw(segment: &str) -> Cow<'_, str> {
    SPECIAL_CHARACTER.replace_all(segment, r"\$1")
}
