//! Clipboard text analysis.
//!
//! Everything here is pure: normalization of line endings, recovery of a
//! Markdown fenced block, and the heuristic deciding whether text is Python.

mod fence;
mod normalize;
mod python;

pub use fence::{extract_fence, FencedBlock};
pub use normalize::normalize_newlines;
pub use python::looks_like_python;
