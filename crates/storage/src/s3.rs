//! S3-compatible storage backend.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::config::StorageConfig;
use crate::path::object_path;
use crate::provider::{StorageError, StorageProvider};

/// Stores images in an S3 (or S3-compatible) bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Build a client from the storage configuration.
    ///
    /// Static credentials and a custom endpoint are optional; without them
    /// the ambient AWS credential chain and the regional endpoint apply.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.s3_region.clone()));
        if let (Some(key), Some(secret)) =
            (&config.s3_access_key_id, &config.s3_secret_access_key)
        {
            loader = loader.credentials_provider(Credentials::new(
                key.clone(),
                secret.clone(),
                None,
                None,
                "rivera-env",
            ));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.s3_endpoint_url {
            // Path-style addressing keeps MinIO and other S3 clones working.
            builder = builder.endpoint_url(endpoint.clone()).force_path_style(true);
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl StorageProvider for S3Storage {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let path = object_path(file_name);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&path)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                file_name: file_name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(path)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.public_base_url, self.bucket, path)
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| StorageError::Remove {
                path: path.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}
