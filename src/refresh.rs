//! One complete refresh run
//!
//! Fetch → extract → categorize → publish. The profile and the modifier
//! definitions are fetched concurrently; everything after that is sequential.

use crate::activities::{categorize, ActivityExtractor, ExtractionReport};
use crate::bungie::{BungieClient, CharacterRef, JsonTransport, ModifierLookup};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::publish::{PublishOutcome, PublishPipeline};

/// Summary of a refresh run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Extraction counters
    pub report: ExtractionReport,

    /// Category groups published
    pub categories: usize,

    /// Activities published
    pub activities: usize,

    /// Publish result
    pub publish: PublishOutcome,
}

/// Refresh the published activity document for `character`.
pub async fn refresh_current_activities<T: JsonTransport>(
    client: &BungieClient<T>,
    catalog: &Catalog,
    character: &CharacterRef,
    pipeline: &PublishPipeline,
) -> Result<RefreshSummary> {
    tracing::info!(character_id = character.character_id, "Refreshing current activities");

    let (records, definitions) = tokio::try_join!(
        client.fetch_available_activities(character),
        client.fetch_modifier_definitions()
    )?;

    let modifiers = ModifierLookup::new(&definitions, client.base_url());
    let extraction = ActivityExtractor::new(catalog, modifiers, client.base_url()).extract(&records);
    let report = extraction.report;
    tracing::info!(
        records = report.records,
        activities = extraction.activities.len(),
        catalog_misses = report.catalog_misses,
        modifier_misses = report.modifier_misses,
        duplicates = report.duplicates,
        unnamed = report.unnamed,
        "Extracted activities"
    );

    let document = categorize(extraction.activities);
    let summary = RefreshSummary {
        report,
        categories: document.categories().len(),
        activities: document.activity_count(),
        publish: pipeline.publish(&document).await?,
    };

    tracing::info!(
        fingerprint = %summary.publish.fingerprint,
        remote = ?summary.publish.remote,
        categories = summary.categories,
        activities = summary.activities,
        "Refresh complete"
    );
    Ok(summary)
}
