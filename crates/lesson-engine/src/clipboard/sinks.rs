use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use super::{ClipboardError, ClipboardSink};

/// Sink that writes copied text to any [`Write`] (stdout in the CLI).
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> ClipboardSink for WriterSink<W> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ClipboardError::Rejected("writer lock poisoned".into()))?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Sink that replaces the contents of a file with the copied text.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClipboardSink for FileSink {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|source| ClipboardError::File {
                path: self.path.clone(),
                source,
            })
    }
}
