//! Markdown fenced-block detection.

const FENCE: &str = "```";

/// A triple-backtick fenced block recovered from clipboard text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// The body between the fences, exclusive on both ends.
    pub code: String,
    /// Lower-cased token after the opening fence, absent when empty.
    pub language_hint: Option<String>,
}

/// Extracts a fenced block from `s`, or `None` when `s` is not one.
///
/// The trimmed input must start with a fence; the rest of the opening line
/// is the language hint. The body runs up to the *last* fence found after
/// the opening line, so backticks inside the body don't cut it short. An
/// unterminated fence (no closing fence, or no line-feed after the opening
/// marker at all) yields `None` and the caller keeps the original text.
pub fn extract_fence(s: &str) -> Option<FencedBlock> {
    let trimmed = s.trim();
    let rest = trimmed.strip_prefix(FENCE)?;

    let newline = rest.find('\n')?;
    let hint = rest[..newline].trim();
    let language_hint = if hint.is_empty() {
        None
    } else {
        Some(hint.to_lowercase())
    };

    let body = &rest[newline + 1..];
    let close = body.rfind(FENCE)?;

    Some(FencedBlock {
        code: body[..close].to_string(),
        language_hint,
    })
}
