//! Bullet list extraction for `Points` blocks.

use super::inline::{EmphasisSpan, format_emphasis};

/// Leading marker of a bullet item line.
pub const BULLET_MARKER: char = '-';

/// Extracts bullet items from a block's raw text.
///
/// Only lines whose trimmed form starts with [`BULLET_MARKER`] are kept; blank
/// lines and stray prose are dropped. The marker and any whitespace after it
/// are stripped and the remainder is run through [`format_emphasis`].
pub fn extract_bullets(block_text: &str) -> Vec<Vec<EmphasisSpan>> {
    block_text
        .split('\n')
        .filter_map(|line| line.trim().strip_prefix(BULLET_MARKER))
        .map(|item| format_emphasis(item.trim()))
        .collect()
}
