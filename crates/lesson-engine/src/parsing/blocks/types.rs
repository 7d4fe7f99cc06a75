use serde::Serialize;

use super::kinds::CodeFence;

/// The kind of a lesson block, selected by the marker that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Lesson title (`##TITLE##`), may carry its text on the marker line.
    Title,
    /// Introductory paragraph (`##INTRO##`).
    Intro,
    /// Section heading (`##SECTION##`), may carry its text on the marker line.
    Section,
    /// Body paragraph (`##PARAGRAPH##`).
    Paragraph,
    /// Bullet list (`##POINTS##`).
    Points,
    /// Fenced code sample (`##CODE##`).
    Code,
    /// Closing summary (`##SUMMARY##`).
    Summary,
}

impl BlockKind {
    /// Whether text after the marker on the same line becomes the first content line.
    pub fn accepts_inline_text(self) -> bool {
        matches!(self, BlockKind::Title | BlockKind::Section)
    }
}

/// A parsed block: its kind plus the trimmed, newline-joined content lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    /// Present only for [`BlockKind::Code`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Block {
    pub(crate) fn from_lines(kind: BlockKind, lines: &[String], language: Option<String>) -> Self {
        let language = match kind {
            BlockKind::Code => {
                Some(language.unwrap_or_else(|| CodeFence::DEFAULT_LANGUAGE.to_string()))
            }
            _ => None,
        };
        Self {
            kind,
            text: lines.join("\n").trim().to_string(),
            language,
        }
    }

    /// The code language, for code blocks.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn is_code(&self) -> bool {
        self.kind == BlockKind::Code
    }
}
