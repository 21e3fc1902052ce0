//! File-upload helper layered over vendor-agnostic object storage.
//!
//! Given an already-validated uploaded file (or a local file path), this crate
//! picks a destination directory and a destination name, then delegates the
//! actual write to a storage disk. Disks are backed by Apache OpenDAL, so the
//! same upload code runs against S3-compatible stores, Azure Blob Storage, or
//! the local filesystem.
//!
//! # Modules
//!
//! - `disk` - the storage collaborator: the [`Disk`] trait, disk
//!   configuration, and the OpenDAL-backed [`ObjectDisk`]
//! - `upload` - the naming/placement engine ([`Uploader`]), naming
//!   strategies, and the named-disk [`UploadManager`]
//!
//! # Example
//!
//! ```no_run
//! use uploadfs::{DiskConfig, DiskProvider, UploadConfig, UploadManager, SourceFile};
//!
//! # async fn run() -> Result<(), uploadfs::UploadError> {
//! let config = UploadConfig::new("local")
//!     .with_disk("local", DiskConfig::new(DiskProvider::local_fs("./storage")));
//! let manager = UploadManager::new(config);
//!
//! let file = SourceFile::new("avatar.png", &b"\x89PNG..."[..]);
//! let stored = manager.disk(None)?
//!     .directory("avatars")
//!     .unique_name()
//!     .upload(&file)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Name collisions with caller-chosen names are resolved by silently falling
//! back to a generated unique name; generated strategies are taken to be
//! collision-safe by construction. The existence check and the write are two
//! separate backend calls, so concurrent uploads racing for the same name are
//! last-write-wins - callers that need uniqueness under concurrency should
//! use a generated strategy.

pub mod disk;
pub mod upload;

pub use disk::{Disk, DiskConfig, DiskError, DiskProvider, ObjectDisk, Visibility};
pub use upload::{
    NameFn, NameStrategy, SourceFile, UploadConfig, UploadError, UploadManager, Uploader,
};
