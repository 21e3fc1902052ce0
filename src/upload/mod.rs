//! Naming/placement engine and upload manager.
//!
//! This module decides *where* an uploaded file lands and *what it is called*
//! there, then delegates the byte copy to a [`Disk`](crate::disk::Disk):
//!
//! - [`SourceFile`] - the bytes being uploaded, with their original name
//! - [`NameStrategy`] - how the stored name is derived
//! - [`Uploader`] - the engine: fluent configuration, collision handling,
//!   terminal store/destroy/URL operations
//! - [`UploadManager`] - resolves a named disk to a fresh engine

mod config;
mod error;
mod manager;
mod naming;
mod source;
mod uploader;

pub use config::UploadConfig;
pub use error::UploadError;
pub use manager::UploadManager;
pub use naming::{NameFn, NameStrategy};
pub use source::SourceFile;
pub use uploader::Uploader;
