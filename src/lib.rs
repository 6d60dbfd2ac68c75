//! Today in Destiny 2 - the current Destiny 2 activity rotation as JSON
//!
//! Each run reads a character's available activities from the Bungie API,
//! resolves them against a curated catalog, groups them into "Today" and
//! "This Week", and publishes the result to S3 behind CloudFront. Nothing is
//! uploaded or invalidated when the content has not changed since the last
//! run.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   profile (components=204)   ┌─────────────────────┐
//! │   Bungie API     ├─────────────────────────────►│  ActivityExtractor  │
//! │                  ├─────────────────────────────►│  - Catalog lookup   │
//! └──────────────────┘   modifier definitions       │  - ModifierLookup   │
//!                                                   │  - dedup            │
//!                                                   └──────────┬──────────┘
//!                                                              │
//!                                                   ┌──────────▼──────────┐
//!                                                   │     categorize      │
//!                                                   └──────────┬──────────┘
//!                                                              │
//!                        ┌─────────────────────────────────────▼──────────┐
//!                        │                PublishPipeline                  │
//!                        │  serialize → MD5 → compare ETag → put → invalidate
//!                        └───────┬──────────────────┬─────────────┬────────┘
//!                                │                  │             │
//!                            S3 bucket         CloudFront    local mirror
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Curated activity hash catalog
//! - [`bungie`]: Bungie API client and modifier resolution
//! - [`activities`]: Extraction, deduplication and grouping
//! - [`publish`]: Fingerprinting and change-detected publishing
//! - [`storage`]: S3 object store and CloudFront invalidation
//! - [`refresh`]: One complete refresh run
//! - [`config`]: Configuration management

pub mod activities;
pub mod bungie;
pub mod catalog;
pub mod config;
pub mod error;
pub mod publish;
pub mod refresh;
pub mod storage;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use refresh::{refresh_current_activities, RefreshSummary};
