//! Per-path scanning error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors encountered while scanning a single path
///
/// These are recovered into failure results rather than aborting a scan,
/// subject to the scanner's error policy.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The path is a directory where a regular file was expected
    #[error("not a regular file: {path}")]
    InvalidTarget { path: PathBuf },

    /// Reading the path's metadata failed
    #[error("failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening or reading the file's bytes failed
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory traversal entry could not be visited
    #[error("walk error at {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an invalid target error
    pub fn invalid_target(path: &Path) -> Self {
        Self::InvalidTarget {
            path: path.to_path_buf(),
        }
    }

    /// Create a stat error
    pub fn stat(path: &Path, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a read error
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a walk error
    pub fn walk(path: &Path, source: std::io::Error) -> Self {
        Self::Walk {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error occurred at
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidTarget { path }
            | Self::Stat { path, .. }
            | Self::Read { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }
}
