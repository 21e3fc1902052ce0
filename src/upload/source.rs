//! Source file abstraction.

use std::path::Path;

use bytes::Bytes;

use super::error::UploadError;

/// The bytes being uploaded, together with their original name.
///
/// Covers both upload sources: a transient client upload already in memory
/// ([`SourceFile::new`] with the caller-supplied original name) and a file
/// resident on local disk ([`SourceFile::open`]). Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    bytes: Bytes,
}

impl SourceFile {
    /// Create a source file from in-memory bytes and the client's original
    /// file name.
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from the local filesystem.
    ///
    /// The name is taken from the path's final component.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Source`] if the file cannot be read.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| UploadError::source(path, source))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            bytes: Bytes::from(data),
        })
    }

    /// Original file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File contents.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Name without its final extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }

    /// Extension after the final dot, if any.
    ///
    /// A leading dot (`.gitignore`) does not count as an extension separator.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}
