//! # Inline Formatting
//!
//! Converts a plain string with bold emphasis markup (`**text**`) into a
//! sequence of [`EmphasisSpan`]s.
//!
//! ## Modules
//!
//! - **`types`**: `EmphasisSpan` enum (Plain, Emphasized)
//! - **`kinds`**: `Emphasis` delimiter ownership and its matcher
//! - **`parser`**: `format_emphasis()` main entry point
//!
//! ## Losslessness
//!
//! Concatenating span texts reproduces the input with matched delimiter
//! pairs removed and nothing else changed.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format_emphasis;
pub use types::{EmphasisSpan, plain_text};
