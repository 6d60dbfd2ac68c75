//! CloudFront invalidation over the REST API

use super::credentials::AwsCredentials;
use super::sigv4::Signer;
use super::CacheInvalidator;
use crate::error::{Error, Result};
use async_trait::async_trait;

const HOST: &str = "cloudfront.amazonaws.com";
const API_VERSION: &str = "2020-05-31";
/// CloudFront is a global service signed in us-east-1
const SIGNING_REGION: &str = "us-east-1";

/// Invalidates paths on one distribution
pub struct CloudFrontInvalidator {
    client: reqwest::Client,
    distribution_id: String,
    credentials: AwsCredentials,
}

impl CloudFrontInvalidator {
    /// Create an invalidator for `distribution_id`
    pub fn new(distribution_id: impl Into<String>, credentials: AwsCredentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            distribution_id: distribution_id.into(),
            credentials,
        }
    }

    fn path(&self) -> String {
        format!(
            "/{}/distribution/{}/invalidation",
            API_VERSION, self.distribution_id
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `InvalidationBatch` request body
pub(crate) fn invalidation_batch_xml(paths: &[String], caller_reference: &str) -> String {
    let items: String = paths
        .iter()
        .map(|path| format!("<Path>{}</Path>", escape_xml(path)))
        .collect();

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<InvalidationBatch xmlns="http://cloudfront.amazonaws.com/doc/{}/">"#,
            "<Paths><Quantity>{}</Quantity><Items>{}</Items></Paths>",
            "<CallerReference>{}</CallerReference>",
            "</InvalidationBatch>"
        ),
        API_VERSION,
        paths.len(),
        items,
        escape_xml(caller_reference)
    )
}

#[async_trait]
impl CacheInvalidator for CloudFrontInvalidator {
    async fn invalidate(&self, paths: &[String], caller_reference: &str) -> Result<()> {
        tracing::debug!(
            distribution_id = %self.distribution_id,
            paths = ?paths,
            caller_reference,
            "Creating invalidation"
        );

        let body = invalidation_batch_xml(paths, caller_reference);
        let path = self.path();
        let headers = Signer::new(&self.credentials, SIGNING_REGION, "cloudfront").sign(
            "POST",
            HOST,
            &path,
            "",
            &[("content-type", "text/xml")],
            body.as_bytes(),
            chrono::Utc::now(),
        );

        let mut request = self.client.post(format!("https://{}{}", HOST, path));
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.body(body).send().await.map_err(|e| {
            Error::Storage(format!(
                "Invalidation on {} failed: {}",
                self.distribution_id, e
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Storage(format!(
                "Invalidation on {} returned {}: {}",
                self.distribution_id, status, detail
            )));
        }
        Ok(())
    }
}
