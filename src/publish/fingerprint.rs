//! Canonical bytes and content fingerprints

use crate::activities::CategorizedDocument;
use crate::error::Result;
use md5::{Digest, Md5};

/// Compact JSON in declared field order.
pub fn serialize_document(document: &CategorizedDocument) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(document)?)
}

/// Lowercase hex MD5 of `bytes`, the ETag S3 assigns to single-part uploads.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Whether a store tag names the same content as `fingerprint`.
///
/// Tags may arrive quoted and in either case.
pub fn tags_match(tag: &str, fingerprint: &str) -> bool {
    tag.trim().trim_matches('"').eq_ignore_ascii_case(fingerprint)
}
