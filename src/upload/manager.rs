//! Named-disk resolution.

use crate::disk::ObjectDisk;

use super::config::UploadConfig;
use super::error::UploadError;
use super::uploader::Uploader;

/// Maps disk names to freshly constructed upload engines.
///
/// Callers hold the manager (or an engine built from it) directly; there is
/// no ambient global lookup. Every [`disk`](Self::disk) call builds a new
/// engine, so configuration on one engine never leaks into another.
pub struct UploadManager {
    config: UploadConfig,
}

impl UploadManager {
    /// Create a manager from configuration.
    #[must_use]
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    /// Resolve a disk by name and bind a fresh engine to it.
    ///
    /// `None` resolves the configured default disk.
    ///
    /// # Errors
    ///
    /// [`UploadError::UnknownDisk`] when the name has no configuration;
    /// [`UploadError::Disk`] when the disk cannot be initialized.
    pub fn disk(&self, name: Option<&str>) -> Result<Uploader<ObjectDisk>, UploadError> {
        let name = name.unwrap_or(&self.config.default_disk);
        let disk_config = self
            .config
            .disks
            .get(name)
            .ok_or_else(|| UploadError::unknown_disk(name))?
            .clone();
        let disk = ObjectDisk::from_config(disk_config)?;
        Ok(Uploader::new(disk))
    }

    /// The manager's configuration.
    #[must_use]
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::{DiskConfig, DiskProvider};

    fn manager() -> UploadManager {
        let config = UploadConfig::new("local")
            .with_disk("local", DiskConfig::new(DiskProvider::local_fs("./storage")))
            .with_disk(
                "cdn",
                DiskConfig::new(DiskProvider::local_fs("./cdn"))
                    .with_base_url("https://cdn.example.com"),
            );
        UploadManager::new(config)
    }

    #[test]
    fn resolves_default_disk() {
        let uploader = manager().disk(None).expect("default disk");
        assert_eq!(uploader.disk().provider_name(), "local");
    }

    #[test]
    fn resolves_named_disk() {
        let uploader = manager().disk(Some("cdn")).expect("cdn disk");
        assert_eq!(
            uploader.disk().config().base_url.as_deref(),
            Some("https://cdn.example.com")
        );
    }

    #[test]
    fn unknown_disk_is_an_error() {
        let result = manager().disk(Some("missing"));
        assert!(matches!(
            result,
            Err(UploadError::UnknownDisk { name }) if name == "missing"
        ));
    }
}
