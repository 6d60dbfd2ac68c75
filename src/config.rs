//! Today in Destiny 2 configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bungie API configuration
    #[serde(default)]
    pub bungie: BungieConfig,

    /// Publish configuration
    #[serde(default)]
    pub publish: PublishConfig,

    /// AWS target configuration
    #[serde(default)]
    pub aws: AwsConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let config: AppConfig = toml::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded configuration file");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Bungie API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BungieConfig {
    /// Base URL for platform endpoints, content paths and images
    pub base_url: String,

    /// Manifest locale used for modifier definitions
    pub locale: String,
}

impl Default for BungieConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.bungie.net".to_string(),
            locale: "en".to_string(),
        }
    }
}

/// Publish configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Object key of the published document
    pub key: String,

    /// Content type set on upload
    pub content_type: String,

    /// Prefix of the CDN invalidation caller reference
    pub caller_reference_prefix: String,

    /// Local directory mirroring the published document
    pub local_data_dir: Option<PathBuf>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            key: "d2/today.json".to_string(),
            content_type: "application/json".to_string(),
            caller_reference_prefix: "RefreshCurrentActivities".to_string(),
            local_data_dir: None,
        }
    }
}

/// AWS target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    /// Bucket region
    pub region: String,

    /// Bucket receiving the document
    pub bucket: Option<String>,

    /// CloudFront distribution fronting the bucket
    pub distribution_id: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            bucket: None,
            distribution_id: None,
        }
    }
}

impl AwsConfig {
    /// Apply command-line values; absent values keep the configured ones.
    pub fn apply_overrides(
        &mut self,
        bucket: Option<String>,
        distribution_id: Option<String>,
        region: Option<String>,
    ) {
        if let Some(bucket) = bucket {
            self.bucket = Some(bucket);
        }
        if let Some(distribution_id) = distribution_id {
            self.distribution_id = Some(distribution_id);
        }
        if let Some(region) = region {
            self.region = region;
        }
    }
}
