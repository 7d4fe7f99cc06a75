//! # Code Highlighting
//!
//! Best-effort lexical classification of code block lines for display.
//! This is deliberately not a real lexer: three regex passes tag string
//! literals, lexicon words and call sites, and overlapping tags are resolved
//! by a fixed precedence.
//!
//! ## Modules
//!
//! - **`lexicon`**: fixed keyword and builtin vocabularies (`Lexicon`)
//! - **`token`**: `TokenClass`, `CodeToken`, `CodeLine`
//! - **`tokenizer`**: `tokenize()` / `tokenize_line()` entry points
//!
//! ## Coverage
//!
//! Tokens partition each line: concatenating a line's token texts reproduces
//! the line exactly.

pub mod lexicon;
pub mod token;
pub mod tokenizer;

pub use lexicon::{Lexicon, LexiconError};
pub use token::{CodeLine, CodeToken, TokenClass};
pub use tokenizer::{LINE_COMMENT, tokenize, tokenize_line};
