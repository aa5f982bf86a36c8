//! End-to-end rendering of a package-level documentation comment, mirroring
//! the kinds of content real comments carry: headings, cross-references of
//! every classification, nested lists and code blocks.

use commentmark_engine::{
    Block, BlockKind, CommentBlock, CommentItem, CommentList, DocRef, Document, Inline,
    PackageIndex, RenderConfig,
};
use pretty_assertions::assert_eq;

fn plain(text: &str) -> Inline {
    Inline::Plain(text.into())
}

fn doc_ref(import_path: &str, name: &str, text: &str) -> Inline {
    Inline::DocRef(DocRef {
        import_path: import_path.into(),
        name: name.into(),
        text: text.into(),
    })
}

/// A comment tree exercising every node kind, shaped like the doc comment of
/// a package that references local, same-package, external and broken
/// symbols.
fn package_doc() -> Vec<CommentBlock> {
    vec![
        CommentBlock::Paragraph(vec![plain(
            "Package docs exercises the documentation features\nof the generator.",
        )]),
        CommentBlock::Heading(vec![plain("This is a heading")]),
        CommentBlock::Paragraph(vec![
            plain("This paragraph references the standard library "),
            doc_ref("math/rand", "", "math/rand"),
            plain(", a local type "),
            doc_ref("", "Type", "Type"),
            plain(", a same-package symbol "),
            doc_ref("docs", "Func", "docs.Func"),
            plain(", an external symbol "),
            doc_ref("os", "File", "os.File"),
            plain(", an external link "),
            Inline::Link {
                text: "Outside Link".into(),
                url: "https://example.test/articles".into(),
            },
            plain(" and a "),
            doc_ref("", "broken", "broken link"),
            plain("."),
        ]),
        CommentBlock::Paragraph(vec![plain("It also has a numbered list:")]),
        CommentBlock::List(CommentList {
            ordered: true,
            items: vec![
                CommentItem {
                    blocks: vec![CommentBlock::Paragraph(vec![plain("First")])],
                },
                CommentItem {
                    blocks: vec![CommentBlock::Paragraph(vec![plain("Second")])],
                },
            ],
        }),
        CommentBlock::List(CommentList {
            ordered: false,
            items: vec![CommentItem {
                blocks: vec![
                    CommentBlock::Paragraph(vec![plain("First\nanother line")]),
                    CommentBlock::List(CommentList {
                        ordered: false,
                        items: vec![CommentItem {
                            blocks: vec![CommentBlock::Paragraph(vec![plain("Nested")])],
                        }],
                    }),
                ],
            }],
        }),
        CommentBlock::Code("func GolangCode(t int) int {\n\treturn t + 1\n}".into()),
    ]
}

fn index() -> PackageIndex {
    PackageIndex::with_symbols("docs", ["Type", "Func"])
}

#[test]
fn builds_blocks_in_source_order() {
    let doc = Document::new(&RenderConfig::default(), &package_doc(), &index());

    let kinds: Vec<BlockKind> = doc.blocks().iter().map(Block::kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Paragraph,
            BlockKind::Header,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::List,
            BlockKind::List,
            BlockKind::Code,
        ]
    );
}

#[test]
fn resolves_every_link_classification() {
    let doc = Document::new(&RenderConfig::default(), &package_doc(), &index());

    assert_eq!(
        doc.blocks()[2].text(),
        "This paragraph references the standard library \
         math/rand(https://pkg.go.dev/math/rand), \
         a local type Type(#type-type), \
         a same-package symbol docs.Func(#type-func), \
         an external symbol os.File(https://pkg.go.dev/os#File), \
         an external link Outside Link(https://example.test/articles) \
         and a broken link."
    );
}

#[test]
fn paragraph_line_wrapping_is_collapsed() {
    let doc = Document::new(&RenderConfig::default(), &package_doc(), &index());

    assert_eq!(
        doc.blocks()[0].text(),
        "Package docs exercises the documentation features of the generator."
    );
}

#[test]
fn code_block_text_is_untouched() {
    let doc = Document::new(&RenderConfig::default(), &package_doc(), &index());

    assert_eq!(
        doc.blocks()[6].text(),
        "func GolangCode(t int) int {\n\treturn t + 1\n}"
    );
}

#[test]
fn every_block_inside_a_list_is_inline_at_any_depth() {
    let doc = Document::new(&RenderConfig::default(), &package_doc(), &index());

    fn assert_inline(blocks: &[Block]) {
        for block in blocks {
            assert!(block.inline(), "list contents must be inline");
            if let Some(list) = block.list() {
                for item in list.items() {
                    assert_inline(item.blocks());
                }
            }
        }
    }

    for block in doc.blocks() {
        if let Some(list) = block.list() {
            for item in list.items() {
                assert_inline(item.blocks());
            }
        }
    }
}

#[test]
fn top_level_blocks_are_not_inline() {
    let doc = Document::new(&RenderConfig::default(), &package_doc(), &index());

    for block in doc.blocks() {
        assert!(!block.inline());
    }
}

#[test]
fn custom_symbol_host_flows_into_external_links() {
    let cfg = RenderConfig::default().with_symbol_host("https://docs.example.test");
    let tree = [CommentBlock::Paragraph(vec![doc_ref("os", "File", "os.File")])];
    let doc = Document::new(&cfg, &tree, &index());

    assert_eq!(
        doc.blocks()[0].text(),
        "os.File(https://docs.example.test/os#File)"
    );
}

#[test]
fn rendered_heading_round_trips_through_plain_text() {
    let doc = Document::new(&RenderConfig::new(2), &package_doc(), &index());
    let heading = &doc.blocks()[1];

    let rendered = commentmark_format::header(heading.level(), heading.text()).unwrap();
    assert_eq!(rendered, "## This is a heading");
    assert_eq!(
        commentmark_format::plain_text(&rendered),
        "This is a heading"
    );
}
