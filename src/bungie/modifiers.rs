//! Modifier resolution against `DestinyActivityModifierDefinition`
//!
//! The definitions document is keyed by stringified hash:
//!
//! ```text
//! { "1783825372": { "displayProperties": { "name": "...", "description": "...", "icon": "/common/..." } } }
//! ```
//!
//! Lookups never fail. Missing documents, hashes or fields resolve to an
//! empty name, which callers treat as "not displayable".

use crate::catalog::qualify_url;
use serde_json::Value;

/// A resolved modifier definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierDefinition {
    /// Modifier hash
    pub hash: u64,

    /// Display name, never empty
    pub name: String,

    /// Description, empty when absent
    pub description: String,

    /// Absolute icon URL, empty when absent
    pub icon_url: String,
}

/// Read-only view over one definitions document
#[derive(Debug, Clone, Copy)]
pub struct ModifierLookup<'a> {
    definitions: &'a Value,
    base_url: &'a str,
}

impl<'a> ModifierLookup<'a> {
    /// Wrap a definitions document; `base_url` qualifies relative icon paths.
    pub fn new(definitions: &'a Value, base_url: &'a str) -> Self {
        Self {
            definitions,
            base_url,
        }
    }

    /// Display name for a modifier, or an empty string.
    pub fn resolve_name(&self, modifier_hash: u64) -> String {
        self.display_string(modifier_hash, "name")
    }

    /// Full definition, or `None` when the name cannot be resolved.
    pub fn resolve_full(&self, modifier_hash: u64) -> Option<ModifierDefinition> {
        let name = self.resolve_name(modifier_hash);
        if name.is_empty() {
            return None;
        }

        let icon = self.display_string(modifier_hash, "icon");
        Some(ModifierDefinition {
            hash: modifier_hash,
            name,
            description: self.display_string(modifier_hash, "description"),
            icon_url: qualify_url(self.base_url, &icon),
        })
    }

    fn display_string(&self, modifier_hash: u64, field: &str) -> String {
        self.definitions
            .get(modifier_hash.to_string())
            .and_then(|definition| definition.get("displayProperties"))
            .and_then(|display| display.get(field))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}
