//! One-shot clipboard snapshot.

/// The clipboard representations available at invocation time.
///
/// A representation that was absent, empty, or unreadable is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    /// Clipboard image, already encoded as PNG.
    pub image_png: Option<Vec<u8>>,
    /// Plain-text representation.
    pub text: Option<String>,
    /// HTML representation, as the source application provided it.
    pub html: Option<String>,
}

impl ClipboardSnapshot {
    /// A snapshot built from a plain-text payload only.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}
