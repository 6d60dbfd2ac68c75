//! Catalog entry types

use serde::Serialize;

/// Activity category, declared in display priority order.
///
/// The derived `Ord` is the priority order used when grouping, so new
/// variants must be inserted where they should appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// Daily rotation
    #[serde(rename = "Today")]
    Today,

    /// Weekly rotation
    #[serde(rename = "This Week")]
    ThisWeek,
}

impl Category {
    /// All categories in priority order
    pub const PRIORITY: [Category; 2] = [Category::Today, Category::ThisWeek];

    /// Display label, as written into the published document
    pub fn label(&self) -> &'static str {
        match self {
            Category::Today => "Today",
            Category::ThisWeek => "This Week",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How an entry's display name is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryName {
    /// Fixed name known at authoring time
    Fixed(&'static str),

    /// Taken from the first resolvable modifier on the activity instance.
    ///
    /// Raid challenges expose the challenge itself as a synthetic modifier.
    /// An instance with no resolvable modifier name is dropped, not published
    /// unnamed.
    FromModifiers,
}

/// Canonical metadata for one real-world activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Grouping category
    pub category: Category,

    /// Activity type label, e.g. "Nightfall"
    pub activity_type: &'static str,

    /// Display name source
    pub name: EntryName,

    /// Background image; Bungie-relative path or absolute URL
    pub image_url_template: &'static str,

    /// Attach resolved modifier details to the extracted activity
    pub wants_modifier_detail: bool,
}

impl CatalogEntry {
    /// Qualify the image template against a base URL.
    ///
    /// Absolute templates are returned unchanged.
    pub fn image_url(&self, base_url: &str) -> String {
        qualify_url(base_url, self.image_url_template)
    }
}

/// One authored catalog declaration: every raw hash that denotes the entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogDeclaration {
    /// Stable identifier used in authoring diagnostics
    pub id: &'static str,

    /// Raw activity hashes (difficulty tiers, reissues, ...)
    pub hashes: &'static [u64],

    /// The entry these hashes resolve to
    pub entry: CatalogEntry,
}

/// Join a Bungie-relative path onto a base URL.
///
/// Empty paths stay empty; absolute URLs pass through.
pub fn qualify_url(base_url: &str, path: &str) -> String {
    if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
