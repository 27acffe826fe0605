/// File handling utilities
///
/// This module provides helpers for loading review targets from disk and for
/// presenting their paths in reports.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};

/// Errors raised while loading a review target
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Whether the path exists could not be determined
    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReviewError {
    /// Underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            ReviewError::Read { source, .. } | ReviewError::Stat { source, .. } => source,
        }
    }
}

/// Check whether `path` refers to something on disk.
///
/// Only "not found" (including broken symlinks) counts as missing. Any other
/// metadata failure, such as a parent directory without search permission,
/// is returned as an error.
pub fn path_exists(path: &Path) -> Result<bool, ReviewError> {
    path.try_exists().map_err(|source| ReviewError::Stat {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the full content of a file as text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing, so
/// the only possible error is the read itself.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The decoded content
pub fn load_file(file_path: &Path) -> Result<String, ReviewError> {
    let bytes = fs::read(file_path).map_err(|source| ReviewError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", bytes.len(), file_path.display());

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8, undecodable bytes were replaced",
                file_path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Normalize a path for display in reports.
///
/// Repeated separators, interior `.` components and trailing separators are
/// dropped, so `./tests//test_a.py/` displays as `tests/test_a.py`. `..` is
/// kept untouched, an empty path displays as `.`, and a leading `//` (but not
/// `///`) is preserved as POSIX allows it to carry meaning.
pub fn display_path(path: &Path) -> String {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        return ".".to_string();
    }

    let raw = path.as_os_str().to_string_lossy();
    if cfg!(unix) && raw.starts_with("//") && !raw.starts_with("///") {
        return format!("/{}", normalized.display());
    }

    normalized.display().to_string()
}
