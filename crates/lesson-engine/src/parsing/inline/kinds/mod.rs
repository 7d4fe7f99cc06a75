//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Emphasis`**: `DELIMITER = "**"` wrapping one or more non-`*` characters
//!
//! The formatter calls these constants; it never hardcodes `**`.

pub mod emphasis;

pub use emphasis::Emphasis;
