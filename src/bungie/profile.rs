//! Character activity records from the profile document

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// One available activity as reported upstream
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActivityRecord {
    /// Raw activity hash
    pub activity_hash: u64,

    /// Modifier hashes attached to this instance
    #[serde(default)]
    pub modifier_hashes: Vec<u64>,
}

impl RawActivityRecord {
    /// Create a record
    pub fn new(activity_hash: u64, modifier_hashes: Vec<u64>) -> Self {
        Self {
            activity_hash,
            modifier_hashes,
        }
    }
}

/// Pull a character's available activities out of a `components=204`
/// profile response.
///
/// A missing character is an error; malformed individual records are skipped.
pub fn parse_available_activities(profile: &Value, character_id: u64) -> Result<Vec<RawActivityRecord>> {
    let pointer = format!("/Response/characterActivities/data/{}", character_id);
    let character = profile.pointer(&pointer).ok_or_else(|| {
        Error::Upstream(format!(
            "Character {} not present in profile response",
            character_id
        ))
    })?;

    let Some(activities) = character.get("availableActivities").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let records = activities
        .iter()
        .filter_map(|raw| match RawActivityRecord::deserialize(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed activity record");
                None
            }
        })
        .collect();

    Ok(records)
}
