//! Unstructured rendering path for text that carries no block markers.

use super::inline::{EmphasisSpan, format_emphasis};

/// Separator between paragraphs in unstructured text.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Splits raw text on blank-line boundaries and formats each paragraph.
///
/// Paragraphs that are blank after trimming are dropped.
pub fn fallback_paragraphs(raw: &str) -> Vec<Vec<EmphasisSpan>> {
    raw.split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(format_emphasis)
        .collect()
}
