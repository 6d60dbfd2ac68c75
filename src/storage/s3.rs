//! S3 object store over the REST API

use super::credentials::AwsCredentials;
use super::sigv4::{encode_path, Signer};
use super::ObjectStore;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

/// S3 bucket addressed virtual-host style
pub struct S3ObjectStore {
    client: reqwest::Client,
    bucket: String,
    region: String,
    credentials: AwsCredentials,
}

impl S3ObjectStore {
    /// Create a store for `bucket` in `region`
    pub fn new(bucket: impl Into<String>, region: impl Into<String>, credentials: AwsCredentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            bucket: bucket.into(),
            region: region.into(),
            credentials,
        }
    }

    fn host(&self) -> String {
        format!("{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }

    fn object_path(key: &str) -> String {
        format!("/{}", encode_path(key.trim_start_matches('/')))
    }

    fn signed_request(
        &self,
        method: reqwest::Method,
        key: &str,
        extra_headers: &[(&str, &str)],
        body: &[u8],
    ) -> reqwest::RequestBuilder {
        let host = self.host();
        let path = Self::object_path(key);
        let headers = Signer::new(&self.credentials, &self.region, "s3").sign(
            method.as_str(),
            &host,
            &path,
            "",
            extra_headers,
            body,
            chrono::Utc::now(),
        );

        let mut request = self
            .client
            .request(method, format!("https://{}{}", host, path));
        for (name, value) in headers {
            request = request.header(name, value);
        }
        request
    }
}

/// Strip the quotes S3 wraps around ETag values.
pub(crate) fn normalize_etag(etag: &str) -> String {
    etag.trim().trim_matches('"').to_string()
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object_tag(&self, key: &str) -> Result<Option<String>> {
        tracing::debug!(bucket = %self.bucket, key, "Querying object ETag");

        let response = self
            .signed_request(reqwest::Method::HEAD, key, &[], b"")
            .send()
            .await
            .map_err(|e| Error::Storage(format!("HEAD s3://{}/{} failed: {}", self.bucket, key, e)))?;

        match response.status() {
            // Without s3:ListBucket a missing key answers 403
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
                tracing::debug!(status = %response.status(), "Object not found");
                Ok(None)
            }
            status if status.is_success() => {
                let etag = response
                    .headers()
                    .get(reqwest::header::ETAG)
                    .and_then(|value| value.to_str().ok())
                    .ok_or_else(|| {
                        Error::Storage(format!("s3://{}/{} has no ETag", self.bucket, key))
                    })?;
                Ok(Some(normalize_etag(etag)))
            }
            status => Err(Error::Storage(format!(
                "HEAD s3://{}/{} returned {}",
                self.bucket, key, status
            ))),
        }
    }

    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        tracing::debug!(bucket = %self.bucket, key, bytes = body.len(), "Uploading object");

        let response = self
            .signed_request(
                reqwest::Method::PUT,
                key,
                &[("content-type", content_type)],
                &body,
            )
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Storage(format!("PUT s3://{}/{} failed: {}", self.bucket, key, e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Storage(format!(
                "PUT s3://{}/{} returned {}: {}",
                self.bucket, key, status, detail
            )));
        }
        Ok(())
    }
}
