//! Storage configuration from environment variables.

use std::sync::Arc;

use crate::local::LocalStorage;
use crate::provider::{StorageError, StorageProvider};
use crate::s3::S3Storage;

/// Which backend stores image blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

/// Storage settings read from the environment.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `STORAGE_BACKEND` | `local` | `local` or `s3` |
/// | `STORAGE_BUCKET` | `project-images` | Bucket / mount name embedded in public URLs |
/// | `STORAGE_ROOT` | `./data/storage` | Local backend: directory backing the bucket |
/// | `PUBLIC_BASE_URL` | `http://localhost:8080` | Origin prefixed to public URLs |
/// | `S3_REGION` | `us-east-1` | S3 backend: region |
/// | `S3_ENDPOINT_URL` | none | S3 backend: custom endpoint (MinIO etc.) |
/// | `S3_ACCESS_KEY_ID` | none | S3 backend: static access key |
/// | `S3_SECRET_ACCESS_KEY` | none | S3 backend: static secret key |
///
/// Without static credentials the ambient AWS credential chain is used.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: String,
    pub local_root: String,
    pub public_base_url: String,
    pub s3_region: String,
    pub s3_endpoint_url: Option<String>,
    pub s3_access_key_id: Option<String>,
    pub s3_secret_access_key: Option<String>,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Panics on values that cannot be interpreted; storage misconfiguration
    /// should stop startup.
    pub fn from_env() -> Self {
        let backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .as_str()
        {
            "local" => StorageBackend::Local,
            "s3" => StorageBackend::S3,
            other => panic!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        };
        Self {
            backend,
            bucket: std::env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "project-images".to_string()),
            local_root: std::env::var("STORAGE_ROOT")
                .unwrap_or_else(|_| "./data/storage".to_string()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            s3_region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint_url: std::env::var("S3_ENDPOINT_URL").ok(),
            s3_access_key_id: std::env::var("S3_ACCESS_KEY_ID").ok(),
            s3_secret_access_key: std::env::var("S3_SECRET_ACCESS_KEY").ok(),
        }
    }
}

/// Build the configured provider.
pub async fn build_provider(
    config: &StorageConfig,
) -> Result<Arc<dyn StorageProvider>, StorageError> {
    match config.backend {
        StorageBackend::Local => Ok(Arc::new(LocalStorage::new(
            config.local_root.clone(),
            &config.bucket,
            &config.public_base_url,
        ))),
        StorageBackend::S3 => Ok(Arc::new(S3Storage::from_config(config).await?)),
    }
}
