//! System clipboard access.
//!
//! The clipboard is read exactly once per run, at the start, into a
//! [`ClipboardSnapshot`]. Everything downstream works on the snapshot, so a
//! clipboard that changes mid-run cannot produce a mixed artifact.

mod error;
mod snapshot;

pub use error::ClipboardError;
pub use snapshot::ClipboardSnapshot;

use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tracing::debug;

/// Reads the system clipboard.
pub struct ClipboardReader {
    ctx: ClipboardContext,
}

impl ClipboardReader {
    /// Opens the system clipboard.
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = ClipboardContext::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }

    /// Takes one snapshot of the clipboard's image, text, and HTML
    /// representations.
    ///
    /// Each representation is read at most once; one that is absent or
    /// fails to read becomes `None` without hiding the others.
    pub fn snapshot(&self) -> ClipboardSnapshot {
        let image_png = self.read_image_png();
        let text = self.read_text();
        let html = self.read_html();
        debug!(
            image = image_png.is_some(),
            text = text.is_some(),
            html = html.is_some(),
            "clipboard snapshot"
        );
        ClipboardSnapshot {
            image_png,
            text,
            html,
        }
    }

    /// PNG bytes for the clipboard image, encoding from the bitmap
    /// representation when the clipboard holds no PNG directly.
    fn read_image_png(&self) -> Option<Vec<u8>> {
        if !self.ctx.has(ContentFormat::Image) {
            return None;
        }
        let image = self.ctx.get_image().ok()?;
        let png = image.to_png().ok()?;
        Some(png.get_bytes().to_vec())
    }

    fn read_text(&self) -> Option<String> {
        if !self.ctx.has(ContentFormat::Text) {
            return None;
        }
        // An empty text representation counts as no text at all.
        self.ctx.get_text().ok().filter(|text| !text.is_empty())
    }

    fn read_html(&self) -> Option<String> {
        if !self.ctx.has(ContentFormat::Html) {
            return None;
        }
        self.ctx.get_html().ok().filter(|html| !html.is_empty())
    }
}
