//! # Block Parsing
//!
//! Two-phase, marker-driven block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified as a
//!    marker, a fence or plain content, without looking at its neighbours
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the block
//!    in progress and emits a `Block` whenever the next marker (or EOF) closes it
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Marker and fence vocabulary with owned delimiters
//! - **`classify`**: `LessonLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - A block is only emitted if it received at least one content line
//! - Fence lines are never content, opening or closing, in any block
//! - Blocks keep encounter order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LessonLineClassifier, LineClass};
pub use types::{Block, BlockKind};
