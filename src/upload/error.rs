//! Upload error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::disk::DiskError;

/// Errors raised by the upload engine and manager.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Requested disk name has no configuration.
    #[error("disk '{name}' is not configured")]
    UnknownDisk {
        /// The disk name that was requested.
        name: String,
    },

    /// A local source file could not be read.
    #[error("failed to read source file {path}: {source}")]
    Source {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Storage disk operation failed.
    #[error("disk error: {0}")]
    Disk(#[from] DiskError),
}

impl UploadError {
    /// Create an unknown disk error.
    #[must_use]
    pub fn unknown_disk(name: impl Into<String>) -> Self {
        Self::UnknownDisk { name: name.into() }
    }

    /// Create a source read error.
    #[must_use]
    pub fn source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }
}
