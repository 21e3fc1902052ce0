//! Disk configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage provider backing a disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiskProvider {
    /// S3-compatible storage: Cloudflare R2, Supabase, AWS S3, DigitalOcean Spaces
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// AWS access key ID.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
        /// AWS region.
        region: String,
    },
    /// Azure Blob Storage
    AzureBlob {
        /// Azure storage account name.
        account: String,
        /// Azure storage access key.
        access_key: String,
        /// Azure container name.
        container: String,
    },
    /// Local filesystem (development only)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl DiskProvider {
    /// Create an S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create an Azure Blob Storage provider.
    #[must_use]
    pub fn azure_blob(
        account: impl Into<String>,
        access_key: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self::AzureBlob {
            account: account.into(),
            access_key: access_key.into(),
            container: container.into(),
        }
    }

    /// Create a local filesystem provider (development only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Short provider name, for logs and diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::AzureBlob { .. } => "azure_blob",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Bucket/container the disk writes into.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::AzureBlob { container, .. } => container,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
        }
    }
}

/// Configuration for a single named disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Storage provider configuration.
    pub provider: DiskProvider,
    /// Public URL prefix for stored objects.
    ///
    /// When absent, [`Disk::url`](super::Disk::url) produces a root-relative
    /// URL (`/{path}`).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl DiskConfig {
    /// Create a disk config with no public base URL.
    #[must_use]
    pub fn new(provider: DiskProvider) -> Self {
        Self {
            provider,
            base_url: None,
        }
    }

    /// Set the public URL prefix for stored objects.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_s3() {
        let provider = DiskProvider::s3(
            "https://account.r2.cloudflarestorage.com",
            "uploads",
            "access_key",
            "secret_key",
            "auto",
        );
        assert_eq!(provider.name(), "s3");
        assert_eq!(provider.bucket(), "uploads");
    }

    #[test]
    fn provider_azure() {
        let provider = DiskProvider::azure_blob("uploadsdev", "access_key", "uploads");
        assert_eq!(provider.name(), "azure_blob");
        assert_eq!(provider.bucket(), "uploads");
    }

    #[test]
    fn provider_local() {
        let provider = DiskProvider::local_fs("./storage");
        assert_eq!(provider.name(), "local");
    }

    #[test]
    fn config_base_url() {
        let config = DiskConfig::new(DiskProvider::local_fs("./storage"));
        assert!(config.base_url.is_none());

        let config = config.with_base_url("https://cdn.example.com");
        assert_eq!(config.base_url.as_deref(), Some("https://cdn.example.com"));
    }

    #[test]
    fn config_deserializes_tagged_provider() {
        let json = r#"{
            "provider": { "type": "local_fs", "root": "./storage" },
            "base_url": "https://cdn.example.com"
        }"#;
        let config: DiskConfig = serde_json::from_str(json).expect("valid config");
        assert_eq!(config.provider.name(), "local");
        assert_eq!(config.base_url.as_deref(), Some("https://cdn.example.com"));
    }
}
