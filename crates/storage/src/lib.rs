//! Blob storage for portfolio images.
//!
//! A [`provider::StorageProvider`] abstracts over where image bytes live: a
//! local directory served by the API ([`local::LocalStorage`]) or an
//! S3-compatible bucket ([`s3::S3Storage`]). Public URLs always embed the
//! bucket name so they can be mapped back to object paths when images are
//! removed later.

pub mod config;
pub mod local;
pub mod path;
pub mod provider;
pub mod s3;

pub use config::{build_provider, StorageBackend, StorageConfig};
pub use provider::{remove_public_urls, upload_images, StorageError, StorageProvider};
