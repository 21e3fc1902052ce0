//! The naming/placement engine.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, error};

use crate::disk::{Disk, DiskError, Visibility};

use super::error::UploadError;
use super::naming::{self, NameStrategy};
use super::source::SourceFile;

/// Naming/placement engine bound to a storage disk.
///
/// Resolves the final `{directory}/{name}` for a file about to be persisted
/// and delegates the write to the disk. Configured fluently, consumed by a
/// terminal call ([`upload`](Self::upload) or [`store`](Self::store)); one
/// engine serves one logical upload, though sequential reuse is fine.
///
/// The existence check and the write are separate disk calls. Two concurrent
/// uploads racing for the same resolved name can both pass the check and both
/// write, last one wins; use a generated strategy when uniqueness must hold
/// under concurrency.
pub struct Uploader<D: Disk> {
    disk: D,
    directory: Option<String>,
    name: NameStrategy,
    visibility: Option<Visibility>,
}

impl<D: Disk> Uploader<D> {
    /// Directory used when none is configured.
    pub const DEFAULT_DIRECTORY: &'static str = "files";
    /// Conventional directory for image uploads.
    pub const IMAGE_DIRECTORY: &'static str = "images";

    /// Create an engine bound to `disk`, with default configuration.
    #[must_use]
    pub fn new(disk: D) -> Self {
        Self {
            disk,
            directory: None,
            name: NameStrategy::default(),
            visibility: None,
        }
    }

    /// Set the target directory. No-op when empty.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        let directory = directory.into();
        if !directory.is_empty() {
            self.directory = Some(directory);
        }
        self
    }

    /// Use a literal stored name. No-op when empty.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = NameStrategy::Literal(name);
        }
        self
    }

    /// Compute the stored name from the source file.
    #[must_use]
    pub fn name_with(mut self, f: impl Fn(&SourceFile) -> String + Send + Sync + 'static) -> Self {
        self.name = NameStrategy::Computed(Box::new(f));
        self
    }

    /// Use a random unique name.
    #[must_use]
    pub fn unique_name(mut self) -> Self {
        self.name = NameStrategy::Unique;
        self
    }

    /// Use a timestamp-based name.
    #[must_use]
    pub fn datetime_name(mut self) -> Self {
        self.name = NameStrategy::Datetime;
        self
    }

    /// Use `{stem}_{index}.{ext}`, probing the disk for the first free index.
    #[must_use]
    pub fn sequence_name(mut self) -> Self {
        self.name = NameStrategy::Sequence;
        self
    }

    /// Name the file after the MD5 digest of its contents.
    #[must_use]
    pub fn md5_name(mut self) -> Self {
        self.name = NameStrategy::Md5;
        self
    }

    /// Name the file after the SHA-256 digest of its contents.
    #[must_use]
    pub fn hash_name(mut self) -> Self {
        self.name = NameStrategy::Hash;
        self
    }

    /// Set the visibility applied at write time. Unset means the disk's
    /// default.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// The disk this engine writes to.
    pub fn disk(&self) -> &D {
        &self.disk
    }

    /// Configured directory, or [`Self::DEFAULT_DIRECTORY`].
    #[must_use]
    pub fn resolve_directory(&self) -> &str {
        self.directory.as_deref().unwrap_or(Self::DEFAULT_DIRECTORY)
    }

    /// Resolve the stored name for `file` per the configured strategy.
    ///
    /// # Errors
    ///
    /// The sequence strategy probes the disk and propagates its failures;
    /// every other strategy is infallible.
    pub async fn resolve_name(&self, file: &SourceFile) -> Result<String, UploadError> {
        let name = match &self.name {
            NameStrategy::Unique => naming::unique_name(file),
            NameStrategy::Datetime => naming::datetime_name(file),
            NameStrategy::Sequence => self.next_sequence_name(file).await?,
            NameStrategy::Md5 => naming::md5_name(file),
            NameStrategy::Hash => naming::hash_name(file),
            NameStrategy::Computed(f) => f(file),
            NameStrategy::Literal(name) => name.clone(),
            NameStrategy::ClientOriginal => file.name().to_string(),
        };
        Ok(name)
    }

    /// Store an uploaded file, returning the stored relative path.
    ///
    /// Caller-chosen names that already exist on the disk are silently
    /// replaced with a generated unique name; the returned path is the only
    /// signal that the requested name was not honored.
    ///
    /// # Errors
    ///
    /// Any disk failure propagates; no retry, no partial cleanup.
    pub async fn upload(&self, file: &SourceFile) -> Result<String, UploadError> {
        let mut name = self.resolve_name(file).await?;
        if !self.name.is_generated() {
            name = self.rename_if_exists(name, file).await?;
        }

        let path = format!("{}/{name}", self.resolve_directory());
        self.disk
            .write(&path, file.bytes().clone(), self.visibility)
            .await?;
        debug!(path, "upload stored");
        Ok(path)
    }

    /// Store a file from the local filesystem, returning the stored relative
    /// path.
    ///
    /// # Errors
    ///
    /// [`UploadError::Source`] when the file cannot be read, otherwise as
    /// [`upload`](Self::upload).
    pub async fn store(&self, path: impl AsRef<Path>) -> Result<String, UploadError> {
        let file = SourceFile::open(path).await?;
        self.upload(&file).await
    }

    /// Public URL for a stored path.
    ///
    /// Already-absolute URLs pass through unchanged.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        self.disk.url(path)
    }

    /// Time-limited URL for a stored path.
    ///
    /// Degrades to [`url`](Self::url) when the disk has no temporary-URL
    /// capability (silently) or when generation fails at runtime (logged).
    pub async fn temporary_url(&self, path: &str, expires_in: Duration) -> String {
        match self.disk.temporary_url(path, expires_in).await {
            Ok(url) => url,
            Err(DiskError::TemporaryUrlUnsupported) => self.url(path),
            Err(err) => {
                error!(error = %err, path, "temporary URL generation failed");
                self.url(path)
            }
        }
    }

    /// Idempotent delete.
    ///
    /// An empty path is a no-op success. An absolute URL is reduced to its
    /// path component first. The object is deleted only if it currently
    /// exists; a missing object is still success. Only a failing backend
    /// delete yields `false`.
    pub async fn destroy(&self, path: &str) -> bool {
        if path.is_empty() {
            return true;
        }
        let path = if is_absolute_url(path) {
            url_path(path)
        } else {
            path
        };
        if path.is_empty() {
            return true;
        }
        if self.disk.exists(path).await.unwrap_or(false) {
            return self.disk.delete(path).await.is_ok();
        }
        true
    }

    /// Collision fallback for caller-chosen names: swap in a unique name if
    /// the resolved one is already taken. A single check, not a loop.
    async fn rename_if_exists(
        &self,
        name: String,
        file: &SourceFile,
    ) -> Result<String, UploadError> {
        let path = format!("{}/{name}", self.resolve_directory());
        if self.disk.exists(&path).await? {
            return Ok(naming::unique_name(file));
        }
        Ok(name)
    }

    /// First free `{stem}_{index}.{ext}` in the target directory, probing
    /// from index 1. O(n) disk round-trips in the number of collisions.
    async fn next_sequence_name(&self, file: &SourceFile) -> Result<String, UploadError> {
        let directory = self.resolve_directory();
        let stem = file.stem();
        let mut index = 1u64;
        loop {
            let candidate = match file.extension() {
                Some(ext) => format!("{stem}_{index}.{ext}"),
                None => format!("{stem}_{index}"),
            };
            if !self.disk.exists(&format!("{directory}/{candidate}")).await? {
                return Ok(candidate);
            }
            index += 1;
        }
    }
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Path component of an absolute URL, without the leading slash, query, or
/// fragment.
fn url_path(value: &str) -> &str {
    let rest = value.split_once("://").map_or(value, |(_, rest)| rest);
    let path = rest.find('/').map_or("", |i| &rest[i + 1..]);
    path.split(['?', '#']).next().unwrap_or("")
}
