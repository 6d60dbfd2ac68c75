//! Activity resolution pipeline
//!
//! Raw records → [`ActivityExtractor`] → [`categorize`] → [`CategorizedDocument`]

mod categorizer;
mod extractor;
mod types;

pub use categorizer::categorize;
pub use extractor::{ActivityExtractor, Extraction, ExtractionReport};
pub use types::{ActivityCategory, ActivityModifier, CategorizedDocument, ExtractedActivity};
