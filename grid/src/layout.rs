//! Exportable layout: the JSON export file, share links, and page parameters.
//!
//! A [`SharedLayout`] is the store snapshot plus the context needed to rebuild
//! the page (universe, filters, language, variant, character list). Every
//! field has a default so older or hand-edited payloads still load; `tiers`
//! and `characterMap` stay optional so a payload without an assignment can be
//! told apart from an empty one.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::consts::{DEFAULT_LANGUAGE, DEFAULT_VARIANT, SHARE_PARAM};
use crate::error::LayoutError;
use crate::store::{AssignmentMap, LayoutSnapshot};
use crate::tier::TierMeta;

/// Page context that travels with a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutContext {
    pub universe: String,
    pub filters: Vec<String>,
    pub language: String,
    pub variant: String,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            universe: String::new(),
            filters: Vec::new(),
            language: DEFAULT_LANGUAGE.to_owned(),
            variant: DEFAULT_VARIANT.to_owned(),
        }
    }
}

/// Serialized form used for JSON export and share links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SharedLayout {
    pub universe: String,
    pub filters: Vec<String>,
    pub language: String,
    pub variant: String,
    pub characters: Vec<Character>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<TierMeta>>,
    #[serde(alias = "assignmentMap", skip_serializing_if = "Option::is_none")]
    pub character_map: Option<AssignmentMap>,
}

impl Default for SharedLayout {
    fn default() -> Self {
        let context = LayoutContext::default();
        Self {
            universe: context.universe,
            filters: context.filters,
            language: context.language,
            variant: context.variant,
            characters: Vec::new(),
            tiers: None,
            character_map: None,
        }
    }
}

/// The part of a shared layout that seeds the assignment store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSeed {
    pub tiers: Vec<TierMeta>,
    pub character_map: AssignmentMap,
}

impl SharedLayout {
    /// Combine a store snapshot with its page context.
    #[must_use]
    pub fn capture(context: &LayoutContext, characters: &[Character], snapshot: LayoutSnapshot) -> Self {
        Self {
            universe: context.universe.clone(),
            filters: context.filters.clone(),
            language: context.language.clone(),
            variant: context.variant.clone(),
            characters: characters.to_vec(),
            tiers: Some(snapshot.tiers),
            character_map: Some(snapshot.character_map),
        }
    }

    /// Indented JSON for the export file.
    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `base` with the percent-encoded layout appended as the `data` query parameter.
    pub fn share_url(&self, base: &str) -> Result<String, LayoutError> {
        let json = serde_json::to_string(self)?;
        let sep = if base.contains('?') { '&' } else { '?' };
        Ok(format!("{base}{sep}{SHARE_PARAM}={}", urlencoding::encode(&json)))
    }

    /// Parse a `data` parameter value. Accepts the JSON as-is (the router
    /// already decoded it) or still percent-encoded.
    pub fn parse_share_param(raw: &str) -> Result<Self, LayoutError> {
        match serde_json::from_str::<Self>(raw) {
            Ok(layout) => Ok(layout),
            Err(_) => {
                let decoded = urlencoding::decode(raw)?;
                Ok(serde_json::from_str(&decoded)?)
            }
        }
    }

    /// Tiers and assignment to seed the store with, when both are present.
    pub fn seed(&self) -> Result<LayoutSeed, LayoutError> {
        match (&self.tiers, &self.character_map) {
            (Some(tiers), Some(map)) => Ok(LayoutSeed { tiers: tiers.clone(), character_map: map.clone() }),
            _ => Err(LayoutError::MissingLayout),
        }
    }

    /// Page context carried by this layout.
    #[must_use]
    pub fn context(&self) -> LayoutContext {
        LayoutContext {
            universe: self.universe.clone(),
            filters: self.filters.clone(),
            language: self.language.clone(),
            variant: self.variant.clone(),
        }
    }
}

/// Parse an optional `data` parameter, logging and discarding anything unusable.
#[must_use]
pub fn shared_from_query(raw: Option<&str>) -> Option<SharedLayout> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;
    match SharedLayout::parse_share_param(raw) {
        Ok(layout) => Some(layout),
        Err(e) => {
            log::error!("grid: invalid share data: {e}");
            None
        }
    }
}

/// Seed from an optional `data` parameter; `None` means default initialization.
#[must_use]
pub fn seed_from_query(raw: Option<&str>) -> Option<LayoutSeed> {
    let shared = shared_from_query(raw)?;
    match shared.seed() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("grid: share data ignored: {e}");
            None
        }
    }
}

/// Split a comma-separated `filters` parameter, dropping blanks.
#[must_use]
pub fn parse_filter_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Page parameters after merging the query string with a shared layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub context: LayoutContext,
    pub seed: Option<LayoutSeed>,
}

impl PageParams {
    /// Explicit query parameters win; a shared layout fills the gaps; the
    /// defaults cover the rest.
    #[must_use]
    pub fn resolve(
        universe: &str,
        filters: Option<&str>,
        language: Option<&str>,
        variant: Option<&str>,
        data: Option<&str>,
    ) -> Self {
        let shared = shared_from_query(data);
        let filters = match (filters, &shared) {
            (Some(raw), _) => parse_filter_list(raw),
            (None, Some(shared)) => shared.filters.clone(),
            (None, None) => Vec::new(),
        };
        let language = language
            .map(str::to_owned)
            .or_else(|| shared.as_ref().map(|s| s.language.clone()))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());
        let variant = variant
            .map(str::to_owned)
            .or_else(|| shared.as_ref().map(|s| s.variant.clone()))
            .unwrap_or_else(|| DEFAULT_VARIANT.to_owned());
        let seed = shared.and_then(|s| match s.seed() {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::debug!("grid: shared layout has no seed: {e}");
                None
            }
        });
        Self {
            context: LayoutContext { universe: universe.to_owned(), filters, language, variant },
            seed,
        }
    }
}
