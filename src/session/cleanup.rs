use std::io;
use std::path::{Path, PathBuf};

/// Why the frame directory could not be removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CleanupWarningKind {
    /// The directory was already gone.
    NotFound,
    /// Something kept (or recreated) entries inside the directory.
    NotEmpty,
    /// The process may not delete the directory or one of its entries.
    PermissionDenied,
    /// Any other IO failure.
    Other,
}

impl CleanupWarningKind {
    /// Classify an IO error returned by directory removal.
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::DirectoryNotEmpty => Self::NotEmpty,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for CleanupWarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotFound => "directory not found",
            Self::NotEmpty => "directory not empty",
            Self::PermissionDenied => "permission denied",
            Self::Other => "io error",
        })
    }
}

/// Non-fatal failure to remove intermediate frames.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("could not remove '{}' ({kind}): {message}", .path.display())]
pub struct CleanupWarning {
    /// Failure class.
    pub kind: CleanupWarningKind,
    /// Directory that was being removed.
    pub path: PathBuf,
    /// Underlying IO error text.
    pub message: String,
}

/// Recursively delete `dir`, reporting failure as a warning instead of an error.
pub fn remove_frame_dir(dir: &Path) -> Option<CleanupWarning> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => None,
        Err(e) => Some(CleanupWarning {
            kind: CleanupWarningKind::classify(&e),
            path: dir.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/cleanup.rs"]
mod tests;
