//! Published activity document types
//!
//! Field order here is the serialized order; the publish fingerprint is
//! computed over these exact bytes, so reordering fields changes every
//! fingerprint.

use crate::bungie::ModifierDefinition;
use crate::catalog::Category;
use serde::Serialize;

/// A modifier as shown on an activity card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityModifier {
    pub modifier_name: String,
    pub description: String,
    pub icon_url: String,
}

impl From<ModifierDefinition> for ActivityModifier {
    fn from(definition: ModifierDefinition) -> Self {
        Self {
            modifier_name: definition.name,
            description: definition.description,
            icon_url: definition.icon_url,
        }
    }
}

/// A normalized activity; equality covers every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedActivity {
    /// Grouping key; carried by the enclosing group when serialized
    #[serde(skip)]
    pub category: Category,

    #[serde(rename = "type")]
    pub activity_type: String,

    pub name: String,

    pub image_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<ActivityModifier>>,
}

/// One category group of the published document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategory {
    pub category: Category,
    pub activities: Vec<ExtractedActivity>,
}

/// The published document: category groups in priority order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorizedDocument(pub Vec<ActivityCategory>);

impl CategorizedDocument {
    /// Category groups in order
    pub fn categories(&self) -> &[ActivityCategory] {
        &self.0
    }

    /// Whether no activity survived extraction
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total activity count across groups
    pub fn activity_count(&self) -> usize {
        self.0.iter().map(|group| group.activities.len()).sum()
    }
}
