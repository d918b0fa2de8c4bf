//! Character records and the policy deciding which ones start out unknown.
//!
//! Characters arrive from an external source (API fetch, fallback dataset, or
//! a user upload) and are immutable once loaded; only their container
//! membership changes, and that lives in [`crate::store::AssignmentStore`].

#[cfg(test)]
#[path = "character_test.rs"]
mod character_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::CUSTOM_UNIVERSE;

/// Stable identifier of a character for the whole session.
pub type CharacterId = String;

/// A unit being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier, stable across re-fetches of the same filter set.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Primary image URL (or data URL for uploads).
    pub image: String,
    /// Optional smaller image for dense layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Source universe tag (`pokemon`, `naruto`, `custom`, ...).
    pub universe: String,
}

impl Character {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>, universe: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), image: image.into(), thumbnail: None, universe: universe.into() }
    }

    /// Build an ad-hoc character for a user upload with a locally generated id.
    #[must_use]
    pub fn custom(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self::new(format!("{CUSTOM_UNIVERSE}-{}", Uuid::new_v4()), name, image, CUSTOM_UNIVERSE)
    }

    /// Image to use for small cards: the thumbnail when present.
    #[must_use]
    pub fn card_image(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.image)
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.universe == CUSTOM_UNIVERSE
    }
}

/// Decides whether a newly seen character belongs in the `unknown` area
/// instead of the pool.
///
/// Supplied by whoever produces the character list; the store only asks it
/// about ids it has never placed before.
pub trait UnknownPolicy: Send + Sync {
    fn is_unknown(&self, character: &Character) -> bool;
}

/// Every new character goes to the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverUnknown;

impl UnknownPolicy for NeverUnknown {
    fn is_unknown(&self, _character: &Character) -> bool {
        false
    }
}

/// Characters tagged with a universe other than the active one (or `custom`)
/// could not be classified by the fetch layer.
#[derive(Debug, Clone)]
pub struct ForeignUniverse {
    pub universe: String,
}

impl ForeignUniverse {
    #[must_use]
    pub fn new(universe: impl Into<String>) -> Self {
        Self { universe: universe.into() }
    }
}

impl UnknownPolicy for ForeignUniverse {
    fn is_unknown(&self, character: &Character) -> bool {
        !character.is_custom() && character.universe != self.universe
    }
}
