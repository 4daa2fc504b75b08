use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use qualifier_core::Artifact;

/// Writes the artifact text to every path. Failures are logged and skipped;
/// the returned list holds the paths that were written.
pub(crate) fn persist_artifact(artifact: &Artifact, paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut written = Vec::with_capacity(paths.len());
    for path in paths {
        match write_one(path, artifact.text()) {
            Ok(()) => {
                log::debug!("artifact {} saved to {}", artifact.slot(), path.display());
                written.push(path.clone());
            }
            Err(err) => log::warn!("failed to save artifact to {}: {}", path.display(), err),
        }
    }
    written
}

fn write_one(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)
}
