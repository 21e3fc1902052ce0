//! Disk error types.

use thiserror::Error;

/// Errors raised by storage disk operations.
#[derive(Debug, Error)]
pub enum DiskError {
    /// Disk provider configuration error.
    #[error("disk configuration error: {0}")]
    Configuration(String),

    /// Object not found in storage.
    #[error("object not found: {path}")]
    NotFound {
        /// Path that was not found.
        path: String,
    },

    /// Time-limited URLs are not supported by this disk.
    #[error("temporary URLs not supported by this disk")]
    TemporaryUrlUnsupported,

    /// Backend operation error.
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl DiskError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

impl From<opendal::Error> for DiskError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound {
                path: err.to_string(),
            },
            opendal::ErrorKind::Unsupported => Self::TemporaryUrlUnsupported,
            _ => Self::Operation(err.to_string()),
        }
    }
}
