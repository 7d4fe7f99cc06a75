//! Presentation-ready lesson model.
//!
//! Runs each parsed block through the component that owns its kind: text
//! blocks through the emphasis formatter, `Points` through the bullet
//! extractor and `Code` through the tokenizer. When parsing finds no blocks
//! the raw text is rendered as unstructured paragraphs instead.

use serde::Serialize;

use crate::{
    highlight::{CodeLine, Lexicon, tokenize},
    parsing::{
        EmphasisSpan,
        blocks::{Block, BlockKind},
        extract_bullets, fallback_paragraphs, format_emphasis, parse_content,
    },
};

/// One block, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockView {
    Title { spans: Vec<EmphasisSpan> },
    Intro { spans: Vec<EmphasisSpan> },
    Section { spans: Vec<EmphasisSpan> },
    Paragraph { spans: Vec<EmphasisSpan> },
    Points { items: Vec<Vec<EmphasisSpan>> },
    Code {
        language: String,
        /// Untokenised text, as handed to the copy action.
        raw: String,
        lines: Vec<CodeLine>,
    },
    Summary { spans: Vec<EmphasisSpan> },
}

impl BlockView {
    pub fn from_block(block: &Block, lexicon: &Lexicon) -> Self {
        match block.kind {
            BlockKind::Title => Self::Title {
                spans: format_emphasis(&block.text),
            },
            BlockKind::Intro => Self::Intro {
                spans: format_emphasis(&block.text),
            },
            BlockKind::Section => Self::Section {
                spans: format_emphasis(&block.text),
            },
            BlockKind::Paragraph => Self::Paragraph {
                spans: format_emphasis(&block.text),
            },
            BlockKind::Points => Self::Points {
                items: extract_bullets(&block.text),
            },
            BlockKind::Code => Self::Code {
                language: block.language().unwrap_or_default().to_string(),
                raw: block.text.clone(),
                lines: tokenize(&block.text, lexicon),
            },
            BlockKind::Summary => Self::Summary {
                spans: format_emphasis(&block.text),
            },
        }
    }
}

/// A whole lesson ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", content = "content", rename_all = "lowercase")]
pub enum LessonView {
    /// Marker-delimited blocks in encounter order.
    Structured(Vec<BlockView>),
    /// Blank-line separated paragraphs, used when no blocks were parsed.
    Unstructured(Vec<Vec<EmphasisSpan>>),
}

impl LessonView {
    pub fn from_raw(raw: &str, lexicon: &Lexicon) -> Self {
        let parsed = parse_content(raw);
        if parsed.is_empty() {
            log::debug!("no lesson blocks found, rendering unstructured paragraphs");
            return Self::Unstructured(fallback_paragraphs(raw));
        }
        Self::Structured(
            parsed
                .blocks
                .iter()
                .map(|b| BlockView::from_block(b, lexicon))
                .collect(),
        )
    }

    /// Raw text of each code block, in order.
    pub fn code_snippets(&self) -> Vec<&str> {
        match self {
            Self::Structured(blocks) => blocks
                .iter()
                .filter_map(|b| match b {
                    BlockView::Code { raw, .. } => Some(raw.as_str()),
                    _ => None,
                })
                .collect(),
            Self::Unstructured(_) => vec![],
        }
    }
}
