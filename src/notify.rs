//! Desktop notifications.
//!
//! Fire and forget: a notification that cannot be shown never affects the
//! run's outcome.

use tracing::debug;

/// Shows a desktop notification with the platform notifier, if any.
pub fn notify(title: &str, body: &str) {
    if let Err(e) = show(title, body) {
        debug!(error = %e, "notification failed");
    }
}

#[cfg(target_os = "macos")]
fn show(title: &str, body: &str) -> std::io::Result<()> {
    use std::process::Command;

    // display notification parses quoted strings; embedded quotes and
    // backslashes must be escaped.
    let script = format!(
        "display notification \"{}\" with title \"{}\" sound name \"default\"",
        escape(body),
        escape(title),
    );
    Command::new("osascript")
        .args(["-e", &script])
        .output()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(target_os = "linux")]
fn show(title: &str, body: &str) -> std::io::Result<()> {
    use std::process::Command;

    Command::new("notify-send")
        .args([title, body])
        .output()
        .map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn show(_title: &str, _body: &str) -> std::io::Result<()> {
    Ok(())
}
