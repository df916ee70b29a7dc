//! Heuristic Python detection for clipboard text.
//!
//! A narrow, line-oriented heuristic, not a parser: false positives and
//! negatives are acceptable, determinism is not negotiable.

/// Shebang lines that mark a Python script, matched as substrings.
const SHEBANGS: &[&str] = &[
    "#!/usr/bin/env python",
    "#!/usr/bin/python",
    "#!/bin/python",
];

/// The canonical entry-point guard.
const DUNDER_MAIN: &str = "if __name__ == \"__main__\":";

/// Lines scanned before the heuristic gives up.
const SCAN_LINE_LIMIT: usize = 200;

/// Running score at which scanning stops and the text counts as Python.
const SCORE_THRESHOLD: u32 = 3;

/// Keywords that score when the line also ends with a colon.
const CONTROL_KEYWORDS: &[&str] = &["if ", "for ", "while ", "try", "except", "with ", "elif "];

/// Decides whether `text` is Python source.
///
/// Checks run in order, first match wins: the language hint, a shebang
/// anywhere in the text, the `__main__` guard, then a scored scan of the
/// first 200 lines. Per non-empty, non-comment line the trimmed text
/// scores +2 for `def `/`class `, +1 for `import `/`from `, and +1 for a
/// control keyword ending in `:`; a score of 3 short-circuits to true.
pub fn looks_like_python(text: &str, hint: Option<&str>) -> bool {
    if let Some(hint) = hint {
        if hint.eq_ignore_ascii_case("python") || hint.eq_ignore_ascii_case("py") {
            return true;
        }
    }

    if SHEBANGS.iter().any(|shebang| text.contains(shebang)) {
        return true;
    }

    if text.contains(DUNDER_MAIN) {
        return true;
    }

    let mut score = 0u32;
    for line in text.lines().take(SCAN_LINE_LIMIT) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("def ") || line.starts_with("class ") {
            score += 2;
        }
        if line.starts_with("import ") || line.starts_with("from ") {
            score += 1;
        }
        if line.ends_with(':') && CONTROL_KEYWORDS.iter().any(|kw| line.starts_with(kw)) {
            score += 1;
        }

        if score >= SCORE_THRESHOLD {
            return true;
        }
    }

    false
}
