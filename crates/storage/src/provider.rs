//! The storage provider abstraction and the submit-time helpers built on it.

use rivera_core::portfolio::PendingUpload;

/// Errors surfaced by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to upload {file_name}: {message}")]
    Upload { file_name: String, message: String },

    #[error("Failed to remove {path}: {message}")]
    Remove { path: String, message: String },

    #[error("Storage configuration error: {0}")]
    Config(String),
}

/// A blob store that keeps portfolio images and serves them at public URLs.
///
/// Object paths are bucket-relative (`public/1700000000000-kitchen.webp`);
/// public URLs contain `/{bucket}/` so [`crate::path::resolve_storage_path`]
/// can invert them.
#[async_trait::async_trait]
pub trait StorageProvider: Send + Sync {
    /// Bucket (or top-level directory) name.
    fn bucket(&self) -> &str;

    /// Store one image, returning its bucket-relative object path.
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;

    /// Public URL at which an uploaded object is served.
    fn public_url(&self, path: &str) -> String;

    /// Remove one object. Removing a missing object is not an error.
    async fn remove(&self, path: &str) -> Result<(), StorageError>;
}

/// Upload a batch of images, returning their public URLs in input order.
///
/// Uploads run concurrently; the first failure aborts the whole submit so a
/// project is never saved with a partial image set.
pub async fn upload_images(
    provider: &dyn StorageProvider,
    files: Vec<PendingUpload>,
) -> Result<Vec<String>, StorageError> {
    let uploads = files.into_iter().map(|file| async move {
        let PendingUpload {
            file_name,
            content_type,
            bytes,
        } = file;
        let path = provider.upload(&file_name, &content_type, bytes).await?;
        Ok::<_, StorageError>(provider.public_url(&path))
    });
    futures::future::try_join_all(uploads).await
}

/// Best-effort removal of stored images by their public URLs.
///
/// Failures never abort the caller: each failed removal becomes a warning
/// string. URLs that do not map back to an object path (external images,
/// the placeholder) are skipped with a log line only.
pub async fn remove_public_urls(provider: &dyn StorageProvider, urls: &[String]) -> Vec<String> {
    let mut warnings = Vec::new();
    for url in urls {
        let Some(path) = crate::path::resolve_storage_path(provider.bucket(), url) else {
            tracing::warn!(url = %url, "skipping image with unrecognized storage URL");
            continue;
        };
        if let Err(err) = provider.remove(&path).await {
            tracing::warn!(url = %url, error = %err, "failed to remove stored image");
            warnings.push(format!("Failed to remove image {url}: {err}"));
        }
    }
    warnings
}
