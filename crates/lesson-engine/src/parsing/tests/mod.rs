//! Integration tests for the parsing module.
//!
//! Fixtures (.txt) live in `fixtures/`; every parse is also run through the
//! block invariants.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, BlockKind},
    extract_bullets,
    inline::plain_text,
    parse_content,
};

fn parse_fixture(name: &str) -> Vec<Block> {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();
    let doc = parse_content(&raw);
    invariants::check(&doc.blocks);
    doc.blocks
}

fn kinds(blocks: &[Block]) -> Vec<BlockKind> {
    blocks.iter().map(|b| b.kind).collect()
}

// Fixture-based tests

#[test]
fn fixture_full_lesson() {
    let blocks = parse_fixture("full_lesson");
    assert_eq!(
        kinds(&blocks),
        vec![
            BlockKind::Title,
            BlockKind::Intro,
            BlockKind::Section,
            BlockKind::Paragraph,
            BlockKind::Points,
            BlockKind::Section,
            BlockKind::Code,
            BlockKind::Summary,
        ]
    );
    assert_eq!(blocks[0].text, "Understanding Closures: A Complete Guide");
    assert_eq!(blocks[2].text, "Core Fundamentals");
    assert_eq!(blocks[6].language(), Some("javascript"));
    assert!(blocks[6].text.starts_with("// Counter factory"));
    assert!(blocks[6].text.ends_with('}'));

    let bullets = extract_bullets(&blocks[4].text);
    let texts: Vec<String> = bullets.iter().map(|b| plain_text(b)).collect();
    assert_eq!(
        texts,
        vec![
            "Scope: closures remember where they were created",
            "State: they can hold private state",
        ]
    );
}

#[test]
fn fixture_unterminated_fence() {
    let blocks = parse_fixture("unterminated_fence");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].language(), Some("python"));
    assert_eq!(blocks[0].text, "def greet(name):\n    print(\"hi \" + name)");
}

#[test]
fn fixture_preamble_dropped() {
    let blocks = parse_fixture("preamble_dropped");
    // The empty section marker produces no block.
    assert_eq!(kinds(&blocks), vec![BlockKind::Title, BlockKind::Paragraph]);
    assert_eq!(blocks[0].text, "Arrays");
    assert_eq!(blocks[1].text, "Arrays hold ordered values.");
}

// Behavioural tests

#[test]
fn no_markers_yields_empty() {
    assert!(parse_content("plain text\n\nmore text").is_empty());
}

#[test]
fn empty_document() {
    assert!(parse_content("").is_empty());
}

#[test]
fn title_with_trailing_text() {
    let doc = parse_content("##TITLE## Intro to X\n##INTRO##\nHello");
    assert_eq!(
        doc.blocks,
        vec![
            Block {
                kind: BlockKind::Title,
                text: "Intro to X".into(),
                language: None,
            },
            Block {
                kind: BlockKind::Intro,
                text: "Hello".into(),
                language: None,
            },
        ]
    );
}

#[test]
fn fences_are_swallowed() {
    let doc = parse_content("##CODE##\n```js\nlet x=1;\n```\n##SUMMARY##\nDone");
    invariants::check(&doc.blocks);
    assert_eq!(
        doc.blocks,
        vec![
            Block {
                kind: BlockKind::Code,
                text: "let x=1;".into(),
                language: Some("js".into()),
            },
            Block {
                kind: BlockKind::Summary,
                text: "Done".into(),
                language: None,
            },
        ]
    );
}

#[test]
fn code_without_language_uses_default() {
    let doc = parse_content("##CODE##\n```\nfoo();\n```");
    assert_eq!(doc.blocks[0].language(), Some("javascript"));
}

#[test]
fn whitespace_only_section_title_is_dropped() {
    let doc = parse_content("##SECTION##    \n##PARAGRAPH##\nBody");
    assert_eq!(kinds(&doc.blocks), vec![BlockKind::Paragraph]);
}

#[test]
fn section_title_joins_following_lines() {
    let doc = parse_content("##SECTION## Basics\nand more");
    assert_eq!(doc.blocks[0].text, "Basics\nand more");
}

#[test]
fn trailing_fragment_without_newline_is_processed() {
    let doc = parse_content("##SUMMARY##\nlast words");
    assert_eq!(doc.blocks[0].text, "last words");
}

#[test]
fn crlf_line_endings() {
    let doc = parse_content("##TITLE## Windows\r\n##PARAGRAPH##\r\nBody text\r\n");
    assert_eq!(kinds(&doc.blocks), vec![BlockKind::Title, BlockKind::Paragraph]);
    assert_eq!(doc.blocks[0].text, "Windows");
    assert_eq!(doc.blocks[1].text, "Body text");
}

#[test]
fn code_blocks_iterator() {
    let doc = parse_content("##CODE##\na\n##PARAGRAPH##\np\n##CODE##\nb");
    let code: Vec<&str> = doc.code_blocks().map(|b| b.text.as_str()).collect();
    assert_eq!(code, vec!["a", "b"]);
}
