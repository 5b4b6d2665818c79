//! Filesystem-backed storage for development and tests.
//!
//! Objects live under `{root}/{object path}` and are served by the API's
//! static file mount at `/{bucket}`.

use std::path::PathBuf;

use crate::path::object_path;
use crate::provider::{StorageError, StorageProvider};

pub struct LocalStorage {
    root: PathBuf,
    bucket: String,
    public_base_url: String,
}

impl LocalStorage {
    /// `root` is the directory backing the bucket; `public_base_url` is the
    /// origin the API serves it from (trailing slash optional).
    pub fn new(root: impl Into<PathBuf>, bucket: &str, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            bucket: bucket.to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_file(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait::async_trait]
impl StorageProvider for LocalStorage {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn upload(
        &self,
        file_name: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let path = object_path(file_name);
        let file = self.object_file(&path);
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Upload {
                    file_name: file_name.to_string(),
                    message: e.to_string(),
                })?;
        }
        tokio::fs::write(&file, bytes)
            .await
            .map_err(|e| StorageError::Upload {
                file_name: file_name.to_string(),
                message: e.to_string(),
            })?;
        Ok(path)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, path)
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.object_file(path)).await {
            Ok(()) => Ok(()),
            // Already gone: removal is idempotent.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
