//! Bungie platform client
//!
//! Two read-only fetches feed each run:
//!
//! 1. The character activity profile (`components=204`), which needs the
//!    `X-API-Key` header.
//! 2. The modifier definitions, reached through the manifest: the manifest
//!    names a locale-specific content path which is then fetched without a key.
//!
//! The manifest is fetched at most once per client. Concurrent callers share
//! the same in-flight request through a `OnceCell`.

use super::profile::{parse_available_activities, RawActivityRecord};
use crate::catalog::qualify_url;
use crate::config::BungieConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Header carrying the Bungie API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Manifest component holding activity modifier definitions
pub const MODIFIER_DEFINITIONS_COMPONENT: &str = "DestinyActivityModifierDefinition";

/// Platform `ErrorCode` meaning success
const PLATFORM_SUCCESS: i64 = 1;

/// Transport for JSON GET requests
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET `url` and parse the body as JSON, attaching the API key when given.
    async fn get_json(&self, url: &str, api_key: Option<&str>) -> Result<Value>;
}

/// `reqwest`-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn get_json(&self, url: &str, api_key: Option<&str>) -> Result<Value> {
        let mut request = self.client.get(url);
        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("GET {} returned {}", url, status)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse JSON from {}: {}", url, e)))
    }
}

/// Identifies whose activities are queried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRef {
    /// Platform membership type
    pub membership_type: u32,

    /// Destiny membership ID
    pub membership_id: u64,

    /// Character ID
    pub character_id: u64,
}

/// Bungie API client with a memoized manifest
pub struct BungieClient<T: JsonTransport = HttpTransport> {
    transport: T,
    api_key: String,
    base_url: String,
    locale: String,
    manifest: OnceCell<Arc<Value>>,
}

impl BungieClient<HttpTransport> {
    /// Create a client using HTTP
    pub fn new(api_key: impl Into<String>, config: &BungieConfig) -> Self {
        Self::with_transport(HttpTransport::new(), api_key, config)
    }
}

impl<T: JsonTransport> BungieClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(transport: T, api_key: impl Into<String>, config: &BungieConfig) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            locale: config.locale.clone(),
            manifest: OnceCell::new(),
        }
    }

    /// Base URL used for requests and image qualification
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a character's currently available activities.
    pub async fn fetch_available_activities(
        &self,
        character: &CharacterRef,
    ) -> Result<Vec<RawActivityRecord>> {
        tracing::info!(
            membership_type = character.membership_type,
            membership_id = character.membership_id,
            "Fetching current activities"
        );

        let url = format!(
            "{}/Platform/Destiny2/{}/Profile/{}/?components=204",
            self.base_url, character.membership_type, character.membership_id
        );
        let profile = self.transport.get_json(&url, Some(&self.api_key)).await?;
        check_platform_response(&profile)?;

        let records = parse_available_activities(&profile, character.character_id)?;
        tracing::debug!(records = records.len(), "Parsed available activities");
        Ok(records)
    }

    /// Fetch the modifier definitions document.
    pub async fn fetch_modifier_definitions(&self) -> Result<Value> {
        tracing::info!("Downloading modifier definitions");
        self.fetch_definitions(MODIFIER_DEFINITIONS_COMPONENT).await
    }

    async fn fetch_definitions(&self, component: &str) -> Result<Value> {
        let manifest = self.manifest().await?;
        let pointer = format!(
            "/Response/jsonWorldComponentContentPaths/{}/{}",
            self.locale, component
        );

        let path = manifest
            .pointer(&pointer)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::Upstream(format!(
                    "Manifest has no '{}' content path for locale '{}'",
                    component, self.locale
                ))
            })?;

        let url = qualify_url(&self.base_url, path);
        self.transport.get_json(&url, None).await
    }

    /// The manifest, fetched once and shared by every caller.
    pub async fn manifest(&self) -> Result<Arc<Value>> {
        self.manifest
            .get_or_try_init(|| async {
                tracing::info!("Downloading manifest");
                let url = format!("{}/Platform/Destiny2/Manifest", self.base_url);
                let manifest = self.transport.get_json(&url, None).await?;
                check_platform_response(&manifest)?;
                Ok::<_, Error>(Arc::new(manifest))
            })
            .await
            .cloned()
    }
}

/// Reject platform envelopes reporting a non-success `ErrorCode`.
fn check_platform_response(envelope: &Value) -> Result<()> {
    match envelope.get("ErrorCode").and_then(Value::as_i64) {
        Some(code) if code != PLATFORM_SUCCESS => {
            let message = envelope
                .get("Message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            Err(Error::Upstream(format!(
                "Bungie platform error {}: {}",
                code, message
            )))
        }
        _ => Ok(()),
    }
}
