//! The save command: snapshot the clipboard, decide, write, notify.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use clipsave::clipboard::ClipboardReader;
use clipsave::notify::notify;
use clipsave::save::{plan, write_artifact};
use clipsave::workdir::resolve_target_dir;

/// Exit code when the clipboard holds nothing this tool can save.
const EXIT_NOTHING_TO_SAVE: u8 = 2;

/// Runs one save: reads the clipboard once, plans at most one artifact,
/// writes it, and reports the outcome.
///
/// Returns the process exit code for the "nothing to save" path (2);
/// write failures bubble up as errors and exit 1 from `main`.
pub fn run(dir: Option<&Path>, no_notify: bool) -> anyhow::Result<ExitCode> {
    let snapshot = match ClipboardReader::new() {
        Ok(reader) => reader.snapshot(),
        Err(e) => {
            return Ok(nothing_to_save(
                &format!("Clipboard unavailable: {e}"),
                no_notify,
            ));
        }
    };

    let Some(artifact) = plan(snapshot) else {
        return Ok(nothing_to_save(
            "No image or text on the clipboard.",
            no_notify,
        ));
    };

    let dir = resolve_target_dir(dir);
    match write_artifact(&artifact, &dir) {
        Ok(path) => {
            println!("{}", path.display());
            if !no_notify {
                notify(
                    "Saved Clipboard",
                    &format!("Saved {} to {}", artifact.kind.label(), path.display()),
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if !no_notify {
                notify("Save Failed", &e.to_string());
            }
            Err(e).context("could not save the clipboard")
        }
    }
}

fn nothing_to_save(reason: &str, no_notify: bool) -> ExitCode {
    eprintln!("{reason}");
    if !no_notify {
        notify("Nothing to Save", reason);
    }
    ExitCode::from(EXIT_NOTHING_TO_SAVE)
}
