use super::{
    classify::LineClass,
    types::{Block, BlockKind},
};

/// State machine that turns classified lines into [`Block`]s.
///
/// Content is accumulated for the block opened by the most recent marker and
/// flushed when the next marker arrives or at end of input.
pub struct BlockBuilder {
    current: Option<BlockKind>,
    lines: Vec<String>,
    language: Option<String>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            current: None,
            lines: vec![],
            language: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Marker { kind, trailing } => self.open_block(kind, trailing),
            LineClass::Fence { language } => self.consume_fence(language),
            LineClass::Content(line) => {
                // Text before the first marker is dropped.
                if self.current.is_some() {
                    self.lines.push(line.to_string());
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn open_block(&mut self, kind: BlockKind, trailing: Option<&str>) {
        self.flush();
        self.current = Some(kind);
        if let Some(text) = trailing {
            self.lines.push(text.to_string());
        }
    }

    fn consume_fence(&mut self, language: Option<&str>) {
        // Fence lines are swallowed; only the first language token of a code block counts.
        if self.current == Some(BlockKind::Code)
            && self.language.is_none()
            && let Some(lang) = language
        {
            self.language = Some(lang.to_string());
        }
    }

    fn flush(&mut self) {
        let lines = std::mem::take(&mut self.lines);
        let language = self.language.take();
        if let Some(kind) = self.current
            && !lines.is_empty()
        {
            self.out.push(Block::from_lines(kind, &lines, language));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
