//! In-memory store and invalidator for tests

use super::{CacheInvalidator, ObjectStore};
use crate::error::{Error, Result};
use async_trait::async_trait;
use md5::{Digest, Md5};
use std::collections::HashMap;
use std::sync::Mutex;

/// Object store tagging objects the way S3 does for single-part uploads
#[derive(Default)]
pub(crate) struct MemoryObjectStore {
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    puts: Mutex<Vec<String>>,
    fail_tag_queries: bool,
}

impl MemoryObjectStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store whose tag queries fail with a non-"not found" error
    pub(crate) fn failing() -> Self {
        Self {
            fail_tag_queries: true,
            ..Self::default()
        }
    }

    /// Seed an object with an explicit tag
    pub(crate) fn with_object(self, key: &str, body: &[u8], tag: &str) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (body.to_vec(), tag.to_string()));
        self
    }

    pub(crate) fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|(body, _)| body.clone())
    }

    pub(crate) fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object_tag(&self, key: &str) -> Result<Option<String>> {
        if self.fail_tag_queries {
            return Err(Error::Storage(format!("HEAD {} returned 500", key)));
        }
        Ok(self
            .objects
            .lock()
            .unwrap()
            .get(key)
            .map(|(_, tag)| tag.clone()))
    }

    async fn put_object(&self, key: &str, body: Vec<u8>, _content_type: &str) -> Result<()> {
        let tag = format!("\"{}\"", hex::encode(Md5::digest(&body)));
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (body, tag));
        self.puts.lock().unwrap().push(key.to_string());
        Ok(())
    }
}

/// Invalidator recording every call
#[derive(Default)]
pub(crate) struct RecordingInvalidator {
    pub(crate) calls: Mutex<Vec<(Vec<String>, String)>>,
    fail: bool,
}

impl RecordingInvalidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheInvalidator for RecordingInvalidator {
    async fn invalidate(&self, paths: &[String], caller_reference: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((paths.to_vec(), caller_reference.to_string()));
        if self.fail {
            return Err(Error::Storage("invalidation rejected".to_string()));
        }
        Ok(())
    }
}
