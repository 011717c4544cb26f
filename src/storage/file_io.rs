//! Whole-file reads and crash-safe writes

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Contents of a text file, or `None` when it does not exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, TrackerError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(storage_error("read", path, e)),
    }
}

/// Replace a file's contents so readers see either the old or the new text
///
/// The text goes to a hidden sibling file which is synced and then renamed
/// over `path`. Missing parent directories are created.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TrackerError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create", dir, e))?;
    }

    let staging = staging_path(path);
    let written = File::create(&staging).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("write", &staging, e));
    }

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        storage_error("replace", path, e)
    })
}

/// `dir/.name.tmp`; same directory so the rename never crosses filesystems
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

fn storage_error(action: &str, path: &Path, err: io::Error) -> TrackerError {
    TrackerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}
