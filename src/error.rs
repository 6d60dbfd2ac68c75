//! Today in Destiny 2 error types

use thiserror::Error;

/// Today in Destiny 2 error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reaching or reading the Bungie API
    #[error("Upstream fetch error: {0}")]
    Upstream(String),

    /// Two catalog declarations claim the same raw activity hash
    #[error("Catalog authoring error: hash {hash} is declared by both '{first}' and '{second}'")]
    CatalogAuthoring {
        hash: u64,
        first: String,
        second: String,
    },

    /// Object store or cache invalidation failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file parse error
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for Today in Destiny 2 operations
pub type Result<T> = std::result::Result<T, Error>;
