//! Change-detected publishing
//!
//! The document is serialized once, fingerprinted, and compared against the
//! tag of the object already in the store. Only changed content is uploaded,
//! and only an upload triggers a CDN invalidation. A configured local mirror
//! is overwritten on every run.

mod fingerprint;

pub use fingerprint::{fingerprint, serialize_document, tags_match};

use crate::activities::CategorizedDocument;
use crate::config::PublishConfig;
use crate::error::Result;
use crate::storage::{CacheInvalidator, ObjectStore};
use std::path::PathBuf;
use std::sync::Arc;

/// What happened to the remote copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// The stored tag already matched
    Unchanged,
    /// Uploaded and invalidated
    Uploaded,
    /// No remote target configured
    Skipped,
}

/// Result of one publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Fingerprint of the published bytes
    pub fingerprint: String,

    /// Remote result
    pub remote: RemoteOutcome,

    /// Path of the local mirror, when one was written
    pub mirrored: Option<PathBuf>,
}

struct RemoteTarget {
    store: Arc<dyn ObjectStore>,
    cdn: Arc<dyn CacheInvalidator>,
}

/// Publishes a categorized document to a store and/or a local mirror
pub struct PublishPipeline {
    key: String,
    content_type: String,
    caller_reference_prefix: String,
    remote: Option<RemoteTarget>,
    local_data_dir: Option<PathBuf>,
}

impl PublishPipeline {
    /// Create a pipeline with the configured key and local mirror
    pub fn new(config: &PublishConfig) -> Self {
        Self {
            key: config.key.trim_start_matches('/').to_string(),
            content_type: config.content_type.clone(),
            caller_reference_prefix: config.caller_reference_prefix.clone(),
            remote: None,
            local_data_dir: config.local_data_dir.clone(),
        }
    }

    /// Publish to `store`, invalidating through `cdn` on change
    pub fn with_remote(
        mut self,
        store: Arc<dyn ObjectStore>,
        cdn: Arc<dyn CacheInvalidator>,
    ) -> Self {
        self.remote = Some(RemoteTarget { store, cdn });
        self
    }

    /// Mirror the document under `dir`
    pub fn with_local_mirror(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_data_dir = Some(dir.into());
        self
    }

    /// Publish `document`.
    ///
    /// Any store failure aborts before the mirror is touched.
    pub async fn publish(&self, document: &CategorizedDocument) -> Result<PublishOutcome> {
        let bytes = serialize_document(document)?;
        let fingerprint = fingerprint(&bytes);
        tracing::info!(
            key = %self.key,
            fingerprint = %fingerprint,
            bytes = bytes.len(),
            "Publishing activity document"
        );

        let remote = match &self.remote {
            Some(target) => self.publish_remote(target, &bytes, &fingerprint).await?,
            None => RemoteOutcome::Skipped,
        };

        let mirrored = match &self.local_data_dir {
            Some(dir) => Some(self.write_mirror(dir, &bytes).await?),
            None => None,
        };

        Ok(PublishOutcome {
            fingerprint,
            remote,
            mirrored,
        })
    }

    async fn publish_remote(
        &self,
        target: &RemoteTarget,
        bytes: &[u8],
        fingerprint: &str,
    ) -> Result<RemoteOutcome> {
        match target.store.get_object_tag(&self.key).await? {
            Some(tag) if tags_match(&tag, fingerprint) => {
                tracing::info!(key = %self.key, "Content unchanged, skipping upload");
                return Ok(RemoteOutcome::Unchanged);
            }
            Some(tag) => {
                tracing::info!(key = %self.key, previous = %tag, "Content changed");
            }
            None => {
                tracing::info!(key = %self.key, "No previous content");
            }
        }

        target
            .store
            .put_object(&self.key, bytes.to_vec(), &self.content_type)
            .await?;
        tracing::info!(key = %self.key, "Uploaded activity document");

        let paths = vec![format!("/{}", self.key)];
        let caller_reference = format!("{}-{}", self.caller_reference_prefix, fingerprint);
        target.cdn.invalidate(&paths, &caller_reference).await?;
        tracing::info!(caller_reference = %caller_reference, "Invalidated cached document");

        Ok(RemoteOutcome::Uploaded)
    }

    async fn write_mirror(&self, dir: &std::path::Path, bytes: &[u8]) -> Result<PathBuf> {
        let path = dir.join(&self.key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        tracing::info!(path = %path.display(), "Wrote local mirror");
        Ok(path)
    }
}
