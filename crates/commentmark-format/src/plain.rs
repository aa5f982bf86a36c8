use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Converts an already-rendered Markdown fragment to the plain text that
/// appears in its output, concatenating text-bearing leaf nodes and putting a
/// single space between block-level siblings so words from adjacent blocks
/// never run together.
///
/// This exists to derive anchor slugs from rendered heading text. It is not a
/// general unrendering utility: code spans and code block contents do not
/// appear in the result.
pub fn plain_text(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);

    let mut out = String::new();
    let mut in_code_block = false;
    let mut pending_break = false;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                pending_break = true;
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => pending_break = true,
            Event::Text(t) if !in_code_block => {
                if pending_break && !out.is_empty() {
                    out.push(' ');
                }
                pending_break = false;
                out.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak => {
                if !in_code_block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }

    out
}
