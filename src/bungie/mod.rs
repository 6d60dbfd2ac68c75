//! Bungie platform integration
//!
//! Fetches the character activity profile and the modifier definitions, and
//! resolves modifier hashes against those definitions.

mod client;
mod modifiers;
mod profile;

pub use client::{
    BungieClient, CharacterRef, HttpTransport, JsonTransport, API_KEY_HEADER,
    MODIFIER_DEFINITIONS_COMPONENT,
};
pub use modifiers::{ModifierDefinition, ModifierLookup};
pub use profile::{parse_available_activities, RawActivityRecord};

#[cfg(test)]
pub(crate) use client::tests as fixtures;
