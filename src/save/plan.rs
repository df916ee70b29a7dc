//! The save decision: what one artifact a clipboard snapshot yields.
//!
//! Priority order: image, then Python, then HTML, then Markdown, then
//! nothing. An image always wins; text is normalized and unwrapped from a
//! fenced block before classification; the HTML artifact saves the raw
//! HTML representation, not the fence-extracted text.

use tracing::debug;

use crate::clipboard::ClipboardSnapshot;
use crate::content::{extract_fence, looks_like_python, normalize_newlines};

/// The decided output kind for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Python,
    Html,
    Markdown,
}

impl ContentKind {
    /// Filename prefix ahead of the counter.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Image => "Clip-Img-",
            Self::Python => "Clip-Py-",
            Self::Html => "Clip-Html-",
            Self::Markdown => "Clip-Md-",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Image => "png",
            Self::Python => "py",
            Self::Html => "html",
            Self::Markdown => "md",
        }
    }

    /// Label for notifications and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Python => "Python source",
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
        }
    }
}

/// What gets written for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Bytes(Vec<u8>),
    Text(String),
}

/// The single planned output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ContentKind,
    pub payload: Payload,
}

/// Decides what to save from a snapshot, or `None` when the clipboard
/// holds neither an image nor text.
///
/// Pure: the same snapshot always plans the same artifact. Text payloads
/// leave here with exactly one trailing line-feed.
pub fn plan(snapshot: ClipboardSnapshot) -> Option<Artifact> {
    if let Some(bytes) = snapshot.image_png {
        debug!(bytes = bytes.len(), "planned image artifact");
        return Some(Artifact {
            kind: ContentKind::Image,
            payload: Payload::Bytes(bytes),
        });
    }

    let text = normalize_newlines(&snapshot.text?);

    // A complete fenced block replaces the text and supplies the hint; an
    // unterminated fence leaves the text untouched.
    let (text, hint) = match extract_fence(&text) {
        Some(block) => (block.code, block.language_hint),
        None => (text, None),
    };

    let artifact = if looks_like_python(&text, hint.as_deref()) {
        Artifact {
            kind: ContentKind::Python,
            payload: Payload::Text(with_trailing_newline(text)),
        }
    } else if let Some(html) = snapshot.html {
        // The raw HTML representation is saved, not the fenced body.
        Artifact {
            kind: ContentKind::Html,
            payload: Payload::Text(with_trailing_newline(html)),
        }
    } else {
        Artifact {
            kind: ContentKind::Markdown,
            payload: Payload::Text(with_trailing_newline(text)),
        }
    };

    debug!(kind = artifact.kind.label(), "planned text artifact");
    Some(artifact)
}

/// Appends a line-feed when `text` does not already end with one.
fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
