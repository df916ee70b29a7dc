//! Line-ending canonicalization.

/// Replaces every CRLF pair with a single line-feed, then any remaining
/// lone carriage return with a line-feed.
///
/// Idempotent; the output never contains `\r`.
pub fn normalize_newlines(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else {
            result.push(c);
        }
    }

    result
}
