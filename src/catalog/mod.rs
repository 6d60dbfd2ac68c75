//! Static activity catalog
//!
//! Maps the raw activity hashes reported by the Bungie API onto a small set
//! of canonical entries. Several hashes usually denote the same real-world
//! activity (difficulty tiers, seasonal reissues), so each declaration lists
//! every hash it owns. The declarations are inverted into a `hash -> entry`
//! index once at startup.
//!
//! A hash claimed by two declarations is an authoring mistake and fails
//! construction; lookups never depend on declaration order.

mod builtin;
mod types;

pub use builtin::{VANGUARD_STRIKES_HASH, VAULT_OF_GLASS_CHALLENGE_HASH};
pub use types::{qualify_url, CatalogDeclaration, CatalogEntry, Category, EntryName};

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Validated hash-to-entry lookup table
#[derive(Debug)]
pub struct Catalog {
    declarations: Vec<CatalogDeclaration>,
    index: HashMap<u64, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting overlapping hash sets.
    pub fn new(declarations: Vec<CatalogDeclaration>) -> Result<Self> {
        let mut index: HashMap<u64, usize> = HashMap::new();

        for (position, declaration) in declarations.iter().enumerate() {
            for &hash in declaration.hashes {
                if let Some(&owner) = index.get(&hash) {
                    return Err(Error::CatalogAuthoring {
                        hash,
                        first: declarations[owner].id.to_string(),
                        second: declaration.id.to_string(),
                    });
                }
                index.insert(hash, position);
            }
        }

        tracing::debug!(
            entries = declarations.len(),
            hashes = index.len(),
            "Activity catalog built"
        );

        Ok(Self {
            declarations,
            index,
        })
    }

    /// Build the compiled-in catalog
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::DECLARATIONS.to_vec())
    }

    /// Resolve a raw activity hash; `None` for unknown activities.
    pub fn resolve(&self, activity_hash: u64) -> Option<&CatalogEntry> {
        self.index
            .get(&activity_hash)
            .map(|&position| &self.declarations[position].entry)
    }

    /// Number of declared entries
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Number of distinct raw hashes known
    pub fn hash_count(&self) -> usize {
        self.index.len()
    }

    /// Iterate over the declarations in authoring order
    pub fn declarations(&self) -> impl Iterator<Item = &CatalogDeclaration> {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIKE: CatalogEntry = CatalogEntry {
        category: Category::Today,
        activity_type: "Daily Modifiers",
        name: EntryName::Fixed("Vanguard Strikes"),
        image_url_template: "/img/strikes.jpg",
        wants_modifier_detail: true,
    };

    const CHALLENGE: CatalogEntry = CatalogEntry {
        category: Category::ThisWeek,
        activity_type: "Vault of Glass Challenge",
        name: EntryName::FromModifiers,
        image_url_template: "/img/vog.jpg",
        wants_modifier_detail: false,
    };

    #[test]
    fn test_resolve_declared_and_unknown() {
        let catalog = Catalog::new(vec![
            CatalogDeclaration {
                id: "strikes",
                hashes: &[1, 2, 3],
                entry: STRIKE,
            },
            CatalogDeclaration {
                id: "vog",
                hashes: &[10],
                entry: CHALLENGE,
            },
        ])
        .unwrap();

        for hash in [1, 2, 3] {
            assert_eq!(catalog.resolve(hash), Some(&STRIKE));
        }
        assert_eq!(catalog.resolve(10), Some(&CHALLENGE));
        assert!(catalog.resolve(4).is_none());
        assert!(catalog.resolve(u64::MAX).is_none());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.hash_count(), 4);
    }

    #[test]
    fn test_overlapping_declarations_rejected() {
        let err = Catalog::new(vec![
            CatalogDeclaration {
                id: "strikes",
                hashes: &[1, 2],
                entry: STRIKE,
            },
            CatalogDeclaration {
                id: "vog",
                hashes: &[3, 2],
                entry: CHALLENGE,
            },
        ])
        .unwrap_err();

        match err {
            Error::CatalogAuthoring {
                hash,
                first,
                second,
            } => {
                assert_eq!(hash, 2);
                assert_eq!(first, "strikes");
                assert_eq!(second, "vog");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_hash_repeated_within_declaration_rejected() {
        let result = Catalog::new(vec![CatalogDeclaration {
            id: "strikes",
            hashes: &[5, 5],
            entry: STRIKE,
        }]);
        assert!(matches!(result, Err(Error::CatalogAuthoring { hash: 5, .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.resolve(1).is_none());
    }

    #[test]
    fn test_builtin_catalog_is_disjoint() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), builtin::DECLARATIONS.len());

        let declared: usize = builtin::DECLARATIONS.iter().map(|d| d.hashes.len()).sum();
        assert_eq!(catalog.hash_count(), declared);

        for declaration in catalog.declarations() {
            for &hash in declaration.hashes {
                assert_eq!(catalog.resolve(hash), Some(&declaration.entry));
            }
        }
    }

    #[test]
    fn test_builtin_known_entries() {
        let catalog = Catalog::builtin().unwrap();

        let strikes = catalog.resolve(builtin::VANGUARD_STRIKES_HASH).unwrap();
        assert_eq!(strikes.category, Category::Today);
        assert_eq!(strikes.activity_type, "Daily Modifiers");
        assert_eq!(strikes.name, EntryName::Fixed("Vanguard Strikes"));
        assert!(strikes.wants_modifier_detail);

        let vog = catalog
            .resolve(builtin::VAULT_OF_GLASS_CHALLENGE_HASH)
            .unwrap();
        assert_eq!(vog.category, Category::ThisWeek);
        assert_eq!(vog.name, EntryName::FromModifiers);
    }
}
