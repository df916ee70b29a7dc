//! Tests for enumerated filename selection.

use clipsave::files::filename::next_available_path;
use tempfile::TempDir;

// ============================================================================
// Basic Enumeration Tests
// ============================================================================

#[test]
fn empty_directory_starts_at_one() {
    let dir = TempDir::new().unwrap();
    let path = next_available_path(dir.path(), "Clip-Md-", "md");
    assert_eq!(path, dir.path().join("Clip-Md-1.md"));
}

#[test]
fn two_existing_files_yield_three() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Clip-Img-1.png"), b"png").unwrap();
    std::fs::write(dir.path().join("Clip-Img-2.png"), b"png").unwrap();

    let path = next_available_path(dir.path(), "Clip-Img-", "png");
    assert_eq!(path, dir.path().join("Clip-Img-3.png"));
}

#[test]
fn counters_are_per_prefix() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Clip-Img-1.png"), b"png").unwrap();
    std::fs::write(dir.path().join("Clip-Py-1.py"), b"x = 1\n").unwrap();

    let path = next_available_path(dir.path(), "Clip-Html-", "html");
    assert_eq!(path, dir.path().join("Clip-Html-1.html"));
}

// ============================================================================
// Extension Normalization Tests
// ============================================================================

#[test]
fn leading_dot_is_added_when_missing() {
    let dir = TempDir::new().unwrap();
    let bare = next_available_path(dir.path(), "Clip-Py-", "py");
    let dotted = next_available_path(dir.path(), "Clip-Py-", ".py");
    assert_eq!(bare, dotted);
    assert_eq!(bare, dir.path().join("Clip-Py-1.py"));
}

// ============================================================================
// Collision Behavior Tests
// ============================================================================

#[test]
fn never_returns_an_existing_path() {
    let dir = TempDir::new().unwrap();
    for n in 1..=5 {
        std::fs::write(dir.path().join(format!("Clip-Md-{n}.md")), b"x").unwrap();
    }

    let path = next_available_path(dir.path(), "Clip-Md-", "md");
    assert!(!path.exists());
    assert_eq!(path, dir.path().join("Clip-Md-6.md"));
}

#[test]
fn unrelated_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.md"), b"x").unwrap();
    std::fs::write(dir.path().join("Clip-Md-extra.md"), b"x").unwrap();

    let path = next_available_path(dir.path(), "Clip-Md-", "md");
    assert_eq!(path, dir.path().join("Clip-Md-1.md"));
}
