//! Clipboard access errors.

/// Errors that can occur while opening the system clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("could not open the system clipboard: {0}")]
    Unavailable(String),
}
