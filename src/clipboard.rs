//! Clipboard access.
//!
//! Copying runs on the blocking thread pool so a slow or hung clipboard
//! never stalls the UI. The outcome comes back over a channel that the main
//! loop drains.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::code::OutfitCode;

/// Errors raised while writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available: {0}")]
    Unavailable(String),
    #[error("Failed to copy to clipboard: {0}")]
    WriteFailed(String),
}

/// Something that can receive text.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened fresh for every write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Result of one copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub code: OutfitCode,
    pub result: Result<(), ClipboardError>,
}

/// Writes `code` to `clipboard` in the background and reports on `outcomes`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_copy(
    clipboard: Arc<dyn Clipboard>,
    code: OutfitCode,
    outcomes: UnboundedSender<CopyOutcome>,
) {
    tokio::task::spawn_blocking(move || {
        let result = clipboard.write_text(code.as_str());
        match &result {
            Ok(()) => debug!(%code, "outfit code written to clipboard"),
            Err(e) => warn!(%code, error = %e, "clipboard write failed"),
        }
        // The receiver is gone only when the app is shutting down.
        let _ = outcomes.send(CopyOutcome { code, result });
    });
}
