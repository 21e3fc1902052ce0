//! Storage disk abstraction.
//!
//! A *disk* is a named storage backend: an object store the upload engine
//! writes into. The [`Disk`] trait captures the capability set the engine
//! needs (existence check, write, delete, URL building); [`ObjectDisk`] is
//! the production implementation over Apache OpenDAL.

mod config;
mod error;
mod object;

pub use config::{DiskConfig, DiskProvider};
pub use error::DiskError;
pub use object::ObjectDisk;

use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Access-control hint applied at write time.
///
/// What a given value means is up to the backing store; `None` at the write
/// site means "use the backend's default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Object is publicly readable.
    Public,
    /// Object is private to the owning application.
    Private,
}

impl Visibility {
    /// String form as passed to storage backends.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    /// Parse from the string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// Capability set of a storage backend, as consumed by the upload engine.
///
/// Implementations are expected to be atomic-or-failed per call; the engine
/// performs no retries and no partial-write cleanup.
pub trait Disk: Send + Sync {
    /// Check whether an object exists at `path`.
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool, DiskError>> + Send;

    /// Write `data` to `path`, replacing any existing object.
    ///
    /// `visibility` is a backend-specific hint; `None` means the backend
    /// default.
    fn write(
        &self,
        path: &str,
        data: Bytes,
        visibility: Option<Visibility>,
    ) -> impl std::future::Future<Output = Result<(), DiskError>> + Send;

    /// Delete the object at `path`.
    fn delete(&self, path: &str) -> impl std::future::Future<Output = Result<(), DiskError>> + Send;

    /// Public URL for a stored relative path.
    fn url(&self, path: &str) -> String;

    /// Time-limited URL for a stored relative path.
    ///
    /// # Errors
    ///
    /// Returns [`DiskError::TemporaryUrlUnsupported`] when the backend has no
    /// such capability.
    fn temporary_url(
        &self,
        path: &str,
        expires_in: Duration,
    ) -> impl std::future::Future<Output = Result<String, DiskError>> + Send;
}
