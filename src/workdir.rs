//! Destination directory resolution.
//!
//! The target is the directory the user is looking at: an explicit `--dir`
//! wins, then the front file-manager window where the platform exposes
//! one, then a default user directory. Resolved once per run.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Resolves the directory to save into.
pub fn resolve_target_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    if let Some(dir) = front_window_directory() {
        debug!(dir = %dir.display(), "using file manager front window");
        return dir;
    }

    fallback_dir()
}

/// The folder shown in the file manager's front window.
///
/// Only the macOS Finder exposes this; elsewhere the fallback applies.
fn front_window_directory() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        finder_front_window()
    }

    #[cfg(not(target_os = "macos"))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn finder_front_window() -> Option<PathBuf> {
    use std::process::Command;

    const SCRIPT: &str = r#"tell application "Finder"
  if (count of windows) is 0 then
    return POSIX path of (path to desktop)
  else
    try
      return POSIX path of (target of front window as alias)
    on error
      return POSIX path of (path to desktop)
    end try
  end if
end tell"#;

    let output = Command::new("osascript").args(["-e", SCRIPT]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let path = String::from_utf8(output.stdout).ok()?;
    let path = PathBuf::from(path.trim());
    if path.as_os_str().is_empty() || !path.is_dir() {
        return None;
    }
    Some(path)
}

/// Desktop, then home, then the current directory.
fn fallback_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
