//! Today in Destiny 2 - publishes the current Destiny 2 activity rotation
//!
//! Refreshes the activity document either into a local directory or into an
//! S3 bucket fronted by a CloudFront distribution.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use today_in_d2::{
    bungie::{BungieClient, CharacterRef},
    catalog::Catalog,
    config::AppConfig,
    publish::PublishPipeline,
    refresh_current_activities,
    storage::{AwsCredentials, CloudFrontInvalidator, S3ObjectStore},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "today-in-d2")]
#[command(author = "Today in Destiny 2 Team")]
#[command(version)]
#[command(about = "Publishes the current Destiny 2 activity rotation as JSON")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TODAY_IN_D2_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh the current activity document
    Refresh {
        #[command(subcommand)]
        target: RefreshTarget,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[derive(clap::Args)]
struct CharacterArgs {
    /// Bungie API key
    #[arg(env = "BUNGIE_API_KEY")]
    api_key: String,

    /// Platform membership type
    membership_type: u32,

    /// Destiny membership ID
    membership_id: u64,

    /// Character ID
    character_id: u64,
}

impl CharacterArgs {
    fn character(&self) -> CharacterRef {
        CharacterRef {
            membership_type: self.membership_type,
            membership_id: self.membership_id,
            character_id: self.character_id,
        }
    }
}

#[derive(Subcommand)]
enum RefreshTarget {
    /// Write the document to a local directory only
    Local {
        #[command(flatten)]
        character: CharacterArgs,

        /// Directory receiving the document
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Publish to S3 and invalidate CloudFront on change
    Aws {
        #[command(flatten)]
        character: CharacterArgs,

        /// Bucket receiving the document [default: aws.bucket]
        bucket: Option<String>,

        /// CloudFront distribution fronting the bucket [default: aws.distribution_id]
        distribution_id: Option<String>,

        /// Bucket region
        #[arg(long)]
        region: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("today_in_d2={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Refresh { target } => run_refresh(config, target).await?,
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

async fn run_refresh(mut config: AppConfig, target: RefreshTarget) -> Result<()> {
    let catalog = Catalog::builtin()?;
    tracing::debug!(
        declarations = catalog.len(),
        hashes = catalog.hash_count(),
        "Loaded activity catalog"
    );

    let (character, pipeline) = match target {
        RefreshTarget::Local {
            character,
            data_dir,
        } => {
            let data_dir = data_dir
                .or_else(|| config.publish.local_data_dir.clone())
                .unwrap_or_else(|| PathBuf::from("data"));
            let pipeline = PublishPipeline::new(&config.publish).with_local_mirror(data_dir);
            (character, pipeline)
        }
        RefreshTarget::Aws {
            character,
            bucket,
            distribution_id,
            region,
        } => {
            config.aws.apply_overrides(bucket, distribution_id, region);
            (character, aws_pipeline(&config)?)
        }
    };

    let client = BungieClient::new(character.api_key.as_str(), &config.bungie);
    let summary =
        refresh_current_activities(&client, &catalog, &character.character(), &pipeline).await?;

    println!(
        "{} activities in {} categories, fingerprint {} ({:?})",
        summary.activities, summary.categories, summary.publish.fingerprint, summary.publish.remote
    );
    if let Some(path) = summary.publish.mirrored {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn aws_pipeline(config: &AppConfig) -> Result<PublishPipeline> {
    let bucket = config
        .aws
        .bucket
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No bucket configured"))?;
    let distribution_id = config
        .aws
        .distribution_id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No CloudFront distribution configured"))?;
    let credentials = AwsCredentials::from_env()?;

    tracing::info!(
        bucket = %bucket,
        region = %config.aws.region,
        distribution_id = %distribution_id,
        "Publishing to AWS"
    );

    let store = S3ObjectStore::new(bucket, config.aws.region.clone(), credentials.clone());
    let cdn = CloudFrontInvalidator::new(distribution_id, credentials);
    Ok(PublishPipeline::new(&config.publish).with_remote(Arc::new(store), Arc::new(cdn)))
}

fn show_config(config: Option<&AppConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
