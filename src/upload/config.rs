//! Upload manager configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::disk::DiskConfig;

/// Named-disk configuration for the upload manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Disk used when no name is given.
    #[serde(default = "default_disk_name")]
    pub default_disk: String,
    /// Disk configurations by name.
    #[serde(default)]
    pub disks: HashMap<String, DiskConfig>,
}

fn default_disk_name() -> String {
    "local".to_string()
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            default_disk: default_disk_name(),
            disks: HashMap::new(),
        }
    }
}

impl UploadConfig {
    /// Create a config with the given default disk name and no disks.
    #[must_use]
    pub fn new(default_disk: impl Into<String>) -> Self {
        Self {
            default_disk: default_disk.into(),
            disks: HashMap::new(),
        }
    }

    /// Register a named disk.
    #[must_use]
    pub fn with_disk(mut self, name: impl Into<String>, config: DiskConfig) -> Self {
        self.disks.insert(name.into(), config);
        self
    }
}
