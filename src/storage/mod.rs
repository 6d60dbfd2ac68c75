//! Object store and CDN invalidation
//!
//! The publish pipeline only needs three operations: read an object's content
//! tag, replace an object wholesale, and invalidate cached paths. The AWS
//! implementations speak the S3 and CloudFront REST APIs directly, signed
//! with Signature Version 4.

mod cloudfront;
mod credentials;
mod s3;
pub mod sigv4;

#[cfg(test)]
pub(crate) mod memory;

pub use cloudfront::CloudFrontInvalidator;
pub use credentials::AwsCredentials;
pub use s3::S3ObjectStore;

use crate::error::Result;
use async_trait::async_trait;

/// Blob store holding the published document
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Content tag of `key`, or `None` when the object does not exist.
    ///
    /// Any failure other than "not found" is an error.
    async fn get_object_tag(&self, key: &str) -> Result<Option<String>>;

    /// Replace the object at `key`.
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;
}

/// CDN cache invalidation
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate `paths`; `caller_reference` makes retries idempotent.
    async fn invalidate(&self, paths: &[String], caller_reference: &str) -> Result<()>;
}
