pub mod blocks;
pub mod bullets;
pub mod fallback;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, LessonLineClassifier};

pub use bullets::extract_bullets;
pub use fallback::fallback_paragraphs;
pub use inline::{EmphasisSpan, format_emphasis};

/// The ordered blocks parsed from one lesson text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContent {
    pub blocks: Vec<Block>,
}

impl ParsedContent {
    /// True when the input held no markers with content; callers should
    /// fall back to [`fallback_paragraphs`].
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn code_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_code())
    }
}

/// Parses raw lesson text into its ordered block sequence. Never fails.
pub fn parse_content(raw: &str) -> ParsedContent {
    let classifier = LessonLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in raw.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::debug!("parsed {} blocks from {} bytes", blocks.len(), raw.len());
    ParsedContent { blocks }
}
