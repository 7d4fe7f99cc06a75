use super::{
    kinds::{CodeFence, Marker},
    types::BlockKind,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to the block in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A block marker, with same-line text for markers that accept it.
    Marker {
        kind: BlockKind,
        trailing: Option<&'a str>,
    },
    /// A fence line. Never content, whatever block is open.
    Fence { language: Option<&'a str> },
    /// Anything else, kept untrimmed.
    Content(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct LessonLineClassifier;

impl LessonLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Markers are tested before fences, both against the trimmed line.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if let Some(m) = Marker::detect(trimmed) {
            return LineClass::Marker {
                kind: m.kind,
                trailing: m.trailing,
            };
        }

        if let Some(sig) = CodeFence::sig(trimmed) {
            return LineClass::Fence {
                language: sig.language,
            };
        }

        LineClass::Content(line)
    }
}
