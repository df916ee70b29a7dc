//! The single filesystem write for a planned artifact.

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use super::plan::{Artifact, Payload};
use crate::files::filename::next_available_path;

/// Errors from writing the artifact to disk.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `artifact` into `dir` under the first free enumerated name and
/// returns the path written.
///
/// One write, never retried. The name probe and the write are separate
/// steps; the race between them is documented in [`next_available_path`].
pub fn write_artifact(artifact: &Artifact, dir: &Path) -> Result<PathBuf, SaveError> {
    let path = next_available_path(dir, artifact.kind.prefix(), artifact.kind.extension());

    let result = match &artifact.payload {
        Payload::Bytes(bytes) => std::fs::write(&path, bytes),
        Payload::Text(text) => std::fs::write(&path, text.as_bytes()),
    };

    match result {
        Ok(()) => {
            info!(path = %path.display(), kind = artifact.kind.label(), "saved clipboard");
            Ok(path)
        }
        Err(source) => Err(SaveError::Write { path, source }),
    }
}
