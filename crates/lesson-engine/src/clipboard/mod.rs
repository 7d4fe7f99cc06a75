//! # Copy Action
//!
//! Hands raw code text to an external clipboard sink and exposes a transient
//! "confirmed" flag that reverts after [`COPY_CONFIRMATION_DELAY`].
//!
//! Revert timers are never cancelled. A second copy inside the window leaves
//! the first timer running, so the flag can clear earlier than the second
//! copy's own delay would suggest.

pub mod sinks;

use std::{
    future::Future,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

pub use sinks::{FileSink, WriterSink};

/// How long the confirmation stays visible after a successful copy.
pub const COPY_CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to write to clipboard: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write clipboard file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Clipboard rejected the write: {0}")]
    Rejected(String),
}

/// External destination for copied text.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// Copies code to a [`ClipboardSink`] and tracks the confirmation state.
pub struct CopyAction<S> {
    sink: S,
    confirmed: Arc<AtomicBool>,
    reset_after: Duration,
}

impl<S: ClipboardSink> CopyAction<S> {
    pub fn new(sink: S) -> Self {
        Self::with_delay(sink, COPY_CONFIRMATION_DELAY)
    }

    pub fn with_delay(sink: S, reset_after: Duration) -> Self {
        Self {
            sink,
            confirmed: Arc::new(AtomicBool::new(false)),
            reset_after,
        }
    }

    /// Writes `code` to the sink.
    ///
    /// On success the confirmation flag is set and a revert is scheduled on
    /// the current tokio runtime. On failure the error is logged and the flag
    /// is left untouched.
    pub async fn copy(&self, code: &str) {
        match self.sink.write_text(code).await {
            Ok(()) => {
                self.confirmed.store(true, Ordering::SeqCst);
                let confirmed = Arc::clone(&self.confirmed);
                let delay = self.reset_after;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    confirmed.store(false, Ordering::SeqCst);
                });
            }
            Err(e) => log::error!("Failed to copy: {e}"),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        writes: Mutex<Vec<String>>,
    }

    impl ClipboardSink for RecordingSink {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct RejectingSink;

    impl ClipboardSink for RejectingSink {
        async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Rejected("permission denied".into()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn confirmation_reverts_after_delay() {
        let action = CopyAction::new(RecordingSink::default());
        assert!(!action.is_confirmed());

        action.copy("let x = 1;").await;
        assert!(action.is_confirmed());
        assert_eq!(*action.sink.writes.lock().unwrap(), vec!["let x = 1;"]);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(action.is_confirmed());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!action.is_confirmed());
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_write_is_not_confirmed() {
        let action = CopyAction::new(RejectingSink);
        action.copy("code").await;
        assert!(!action.is_confirmed());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_copies_keep_first_timer() {
        let action = CopyAction::new(RecordingSink::default());

        action.copy("first").await;
        tokio::time::sleep(Duration::from_millis(1500)).await;
        action.copy("second").await;
        assert!(action.is_confirmed());

        // The first timer fires at 2000ms even though the second copy was at 1500ms.
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(!action.is_confirmed());
        assert_eq!(action.sink.writes.lock().unwrap().len(), 2);
    }
}
