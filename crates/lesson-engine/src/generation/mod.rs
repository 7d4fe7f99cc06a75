//! # Lesson Generation Boundary
//!
//! Everything needed to obtain raw lesson text for the parser: the prompt,
//! a pluggable [`TextGenerator`] backend, and the deterministic fallback
//! lesson used when no credential is configured or the backend fails.
//!
//! [`ContentService::generate`] always yields text that follows the marker
//! grammar; whether it came from the backend is recorded in
//! [`GeneratedContent`].

pub mod backend;
pub mod error;
pub mod fallback;
pub mod prompt;
pub mod service;

pub use backend::{API_KEY_ENV, CommandGenerator, TextGenerator};
pub use error::GenerationError;
pub use fallback::fallback_lesson;
pub use prompt::{GenerationRequest, build_prompt};
pub use service::{ApiKey, ContentService, FallbackReason, GeneratedContent, GenerationOptions};
