pub mod clipboard;
pub mod generation;
pub mod highlight;
pub mod parsing;
pub mod view;

// Re-export key types for easier usage
pub use clipboard::{COPY_CONFIRMATION_DELAY, ClipboardError, ClipboardSink, CopyAction};
pub use generation::{
    API_KEY_ENV, ApiKey, CommandGenerator, ContentService, FallbackReason, GeneratedContent, GenerationError,
    GenerationOptions, GenerationRequest, TextGenerator, fallback_lesson,
};
pub use highlight::{CodeLine, CodeToken, Lexicon, TokenClass, tokenize};
pub use parsing::{
    EmphasisSpan, ParsedContent,
    blocks::{Block, BlockKind},
    extract_bullets, fallback_paragraphs, format_emphasis, parse_content,
};
pub use view::{BlockView, LessonView};
