//! Category grouping

use super::types::{ActivityCategory, CategorizedDocument, ExtractedActivity};
use crate::catalog::Category;
use std::collections::BTreeMap;

/// Group activities by category.
///
/// Groups follow `Category` priority order regardless of input order, and
/// empty categories are omitted. Activities keep their input order within a
/// group.
pub fn categorize(activities: Vec<ExtractedActivity>) -> CategorizedDocument {
    let mut groups: BTreeMap<Category, Vec<ExtractedActivity>> = BTreeMap::new();
    for activity in activities {
        groups.entry(activity.category).or_default().push(activity);
    }

    CategorizedDocument(
        groups
            .into_iter()
            .map(|(category, activities)| ActivityCategory {
                category,
                activities,
            })
            .collect(),
    )
}
