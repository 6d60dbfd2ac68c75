//! Activity extraction
//!
//! Joins raw activity records against the catalog and the modifier
//! definitions:
//!
//! - unknown activity hashes are dropped (counted as catalog misses)
//! - entries wanting modifier detail carry every resolvable modifier
//! - challenge entries take their name from the first resolvable modifier
//!
//! The upstream list repeats logical activities once per variant instance,
//! so the result is deduplicated on the full activity value, keeping the
//! first occurrence.

use super::types::{ActivityModifier, ExtractedActivity};
use crate::bungie::{ModifierLookup, RawActivityRecord};
use crate::catalog::{Catalog, CatalogEntry, EntryName};
use indexmap::IndexSet;

/// Per-run extraction counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Raw records seen
    pub records: usize,

    /// Records whose activity hash is not in the catalog
    pub catalog_misses: usize,

    /// Modifier hashes that did not resolve to a name
    pub modifier_misses: usize,

    /// Records dropped as exact duplicates
    pub duplicates: usize,

    /// Challenge records dropped because no modifier named them
    pub unnamed: usize,
}

/// Extraction output
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Distinct activities in first-seen order
    pub activities: Vec<ExtractedActivity>,

    /// Counters for observability
    pub report: ExtractionReport,
}

/// Resolves raw records into normalized activities
pub struct ActivityExtractor<'a> {
    catalog: &'a Catalog,
    modifiers: ModifierLookup<'a>,
    base_url: &'a str,
}

impl<'a> ActivityExtractor<'a> {
    /// Create an extractor; `base_url` qualifies catalog image paths.
    pub fn new(catalog: &'a Catalog, modifiers: ModifierLookup<'a>, base_url: &'a str) -> Self {
        Self {
            catalog,
            modifiers,
            base_url,
        }
    }

    /// Extract and deduplicate activities in one pass over `records`.
    pub fn extract(&self, records: &[RawActivityRecord]) -> Extraction {
        let mut report = ExtractionReport {
            records: records.len(),
            ..Default::default()
        };
        let mut distinct: IndexSet<ExtractedActivity> = IndexSet::new();

        for record in records {
            let Some(entry) = self.catalog.resolve(record.activity_hash) else {
                tracing::debug!(activity_hash = record.activity_hash, "Activity not in catalog");
                report.catalog_misses += 1;
                continue;
            };

            if let Some(activity) = self.extract_one(entry, record, &mut report) {
                if !distinct.insert(activity) {
                    report.duplicates += 1;
                }
            }
        }

        Extraction {
            activities: distinct.into_iter().collect(),
            report,
        }
    }

    fn extract_one(
        &self,
        entry: &CatalogEntry,
        record: &RawActivityRecord,
        report: &mut ExtractionReport,
    ) -> Option<ExtractedActivity> {
        let name = match entry.name {
            EntryName::Fixed(name) => name.to_string(),
            EntryName::FromModifiers => {
                let names = self.modifier_names(record, report);
                tracing::debug!(
                    activity_hash = record.activity_hash,
                    challenges = %names.join("\n"),
                    "Resolved challenge modifiers"
                );
                match names.into_iter().next() {
                    Some(first) => first,
                    None => {
                        tracing::warn!(
                            activity_hash = record.activity_hash,
                            activity_type = entry.activity_type,
                            "No modifier names this challenge, dropping it"
                        );
                        report.unnamed += 1;
                        return None;
                    }
                }
            }
        };

        let modifiers = entry
            .wants_modifier_detail
            .then(|| self.modifier_details(record, report));

        Some(ExtractedActivity {
            category: entry.category,
            activity_type: entry.activity_type.to_string(),
            name,
            image_url: entry.image_url(self.base_url),
            modifiers,
        })
    }

    fn modifier_names(&self, record: &RawActivityRecord, report: &mut ExtractionReport) -> Vec<String> {
        record
            .modifier_hashes
            .iter()
            .filter_map(|&hash| {
                let name = self.modifiers.resolve_name(hash);
                if name.is_empty() {
                    report.modifier_misses += 1;
                    None
                } else {
                    Some(name)
                }
            })
            .collect()
    }

    fn modifier_details(
        &self,
        record: &RawActivityRecord,
        report: &mut ExtractionReport,
    ) -> Vec<ActivityModifier> {
        record
            .modifier_hashes
            .iter()
            .filter_map(|&hash| match self.modifiers.resolve_full(hash) {
                Some(definition) => Some(ActivityModifier::from(definition)),
                None => {
                    report.modifier_misses += 1;
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        CatalogDeclaration, Category, VANGUARD_STRIKES_HASH, VAULT_OF_GLASS_CHALLENGE_HASH,
    };
    use serde_json::{json, Value};

    const BASE: &str = "https://www.bungie.net";
    const STRANGERS_IN_TIME: u64 = 3_770_316_456;
    const OF_ALL_TRADES: u64 = 2_214_519_418;
    const ARC_SINGE: u64 = 1_783_825_372;
    const BLACKOUT: u64 = 2_821_775_453;

    fn definitions() -> Value {
        json!({
            STRANGERS_IN_TIME.to_string(): {
                "displayProperties": { "name": "Strangers in Time", "description": "Challenge" }
            },
            OF_ALL_TRADES.to_string(): {
                "displayProperties": { "name": "Of All Trades" }
            },
            ARC_SINGE.to_string(): {
                "displayProperties": {
                    "name": "Arc Singe",
                    "description": "Increased Arc damage from all sources.",
                    "icon": "/common/destiny2_content/icons/arc.png"
                }
            },
            BLACKOUT.to_string(): {
                "displayProperties": { "name": "Blackout", "description": "Enemies hit harder." }
            }
        })
    }

    fn extract(records: &[RawActivityRecord]) -> Extraction {
        let catalog = Catalog::builtin().unwrap();
        let doc = definitions();
        let extractor = ActivityExtractor::new(&catalog, ModifierLookup::new(&doc, BASE), BASE);
        extractor.extract(records)
    }

    #[test]
    fn test_raid_challenge_named_by_first_modifier() {
        let extraction = extract(&[RawActivityRecord::new(
            VAULT_OF_GLASS_CHALLENGE_HASH,
            vec![STRANGERS_IN_TIME, OF_ALL_TRADES],
        )]);

        assert_eq!(extraction.activities.len(), 1);
        let activity = &extraction.activities[0];
        assert_eq!(activity.name, "Strangers in Time");
        assert_eq!(activity.category, Category::ThisWeek);
        assert_eq!(activity.activity_type, "Vault of Glass Challenge");
        assert!(activity.modifiers.is_none());
    }

    #[test]
    fn test_challenge_skips_unresolvable_leading_modifier() {
        let extraction = extract(&[RawActivityRecord::new(
            VAULT_OF_GLASS_CHALLENGE_HASH,
            vec![999, OF_ALL_TRADES],
        )]);
        assert_eq!(extraction.activities[0].name, "Of All Trades");
        assert_eq!(extraction.report.modifier_misses, 1);
    }

    #[test]
    fn test_unnamed_challenge_dropped() {
        let extraction = extract(&[RawActivityRecord::new(VAULT_OF_GLASS_CHALLENGE_HASH, vec![])]);
        assert!(extraction.activities.is_empty());
        assert_eq!(extraction.report.unnamed, 1);
    }

    #[test]
    fn test_daily_modifier_detail() {
        let extraction = extract(&[RawActivityRecord::new(VANGUARD_STRIKES_HASH, vec![ARC_SINGE])]);

        let activity = &extraction.activities[0];
        assert_eq!(activity.category, Category::Today);
        assert_eq!(activity.activity_type, "Daily Modifiers");
        assert_eq!(activity.name, "Vanguard Strikes");
        assert!(activity.image_url.starts_with("https://www.bungie.net/img/"));
        assert_eq!(
            activity.modifiers,
            Some(vec![ActivityModifier {
                modifier_name: "Arc Singe".to_string(),
                description: "Increased Arc damage from all sources.".to_string(),
                icon_url: "https://www.bungie.net/common/destiny2_content/icons/arc.png".to_string(),
            }])
        );
    }

    #[test]
    fn test_unresolvable_modifiers_dropped_individually() {
        let extraction = extract(&[RawActivityRecord::new(
            VANGUARD_STRIKES_HASH,
            vec![ARC_SINGE, 12345, BLACKOUT],
        )]);

        let names: Vec<_> = extraction.activities[0]
            .modifiers
            .as_ref()
            .unwrap()
            .iter()
            .map(|m| m.modifier_name.as_str())
            .collect();
        assert_eq!(names, vec!["Arc Singe", "Blackout"]);
        assert_eq!(extraction.report.modifier_misses, 1);
    }

    #[test]
    fn test_detail_entry_with_no_modifiers_has_empty_list() {
        let extraction = extract(&[RawActivityRecord::new(VANGUARD_STRIKES_HASH, vec![])]);
        assert_eq!(extraction.activities[0].modifiers, Some(vec![]));
    }

    #[test]
    fn test_unknown_activities_dropped_and_counted() {
        let extraction = extract(&[
            RawActivityRecord::new(1, vec![]),
            RawActivityRecord::new(VANGUARD_STRIKES_HASH, vec![ARC_SINGE]),
            RawActivityRecord::new(2, vec![ARC_SINGE]),
        ]);
        assert_eq!(extraction.activities.len(), 1);
        assert_eq!(extraction.report.records, 3);
        assert_eq!(extraction.report.catalog_misses, 2);
    }

    #[test]
    fn test_identical_activities_deduplicated_in_first_seen_order() {
        // Two tiers of the same strike plus a raid in between
        let extraction = extract(&[
            RawActivityRecord::new(1_096_329_108, vec![]),
            RawActivityRecord::new(VAULT_OF_GLASS_CHALLENGE_HASH, vec![STRANGERS_IN_TIME]),
            RawActivityRecord::new(3_542_082_931, vec![BLACKOUT]),
            RawActivityRecord::new(1_681_562_271, vec![STRANGERS_IN_TIME]),
        ]);

        let names: Vec<_> = extraction.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["The Glassway", "Strangers in Time"]);
        assert_eq!(extraction.report.duplicates, 2);
    }

    #[test]
    fn test_activities_differing_in_modifiers_both_kept() {
        let extraction = extract(&[
            RawActivityRecord::new(VANGUARD_STRIKES_HASH, vec![ARC_SINGE]),
            RawActivityRecord::new(4_252_456_044, vec![BLACKOUT]),
        ]);
        assert_eq!(extraction.activities.len(), 2);
        assert_eq!(extraction.report.duplicates, 0);
    }

    #[test]
    fn test_empty_input() {
        let extraction = extract(&[]);
        assert!(extraction.activities.is_empty());
        assert_eq!(extraction.report, ExtractionReport::default());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![CatalogDeclaration {
            id: "strike",
            hashes: &[7],
            entry: CatalogEntry {
                category: Category::Today,
                activity_type: "Strike",
                name: EntryName::Fixed("Test Strike"),
                image_url_template: "https://cdn.example.com/strike.jpg",
                wants_modifier_detail: false,
            },
        }])
        .unwrap();
        let doc = Value::Null;
        let extractor = ActivityExtractor::new(&catalog, ModifierLookup::new(&doc, BASE), BASE);

        let extraction = extractor.extract(&[RawActivityRecord::new(7, vec![ARC_SINGE])]);
        assert_eq!(extraction.activities[0].image_url, "https://cdn.example.com/strike.jpg");
        assert!(extraction.activities[0].modifiers.is_none());
        assert_eq!(extraction.report.modifier_misses, 0);
    }
}
