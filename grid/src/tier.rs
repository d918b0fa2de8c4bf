//! Tier metadata and colour handling.
//!
//! Tier metadata (`id`, `label`, `color`) is stored apart from container
//! membership: relabelling, recolouring, or reordering tiers never touches
//! which characters sit in them.

#[cfg(test)]
#[path = "tier_test.rs"]
mod tier_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TIERS, FALLBACK_TIER_COLOR, TIER_PALETTE};
use crate::container::TierId;

/// A user-defined rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierMeta {
    pub id: TierId,
    pub label: String,
    pub color: String,
}

impl TierMeta {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), color: color.into() }
    }
}

/// The S/A/B/C/D/F ranks every fresh tier list starts with.
#[must_use]
pub fn default_tiers() -> Vec<TierMeta> {
    DEFAULT_TIERS
        .iter()
        .map(|(id, color)| TierMeta::new(*id, *id, *color))
        .collect()
}

/// Colour for the `n`th generated tier.
#[must_use]
pub fn palette_color(n: usize) -> &'static str {
    TIER_PALETTE[n % TIER_PALETTE.len()]
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16);
    let parsed = match hex.len() {
        3 => (channel(&hex[0..1].repeat(2)), channel(&hex[1..2].repeat(2)), channel(&hex[2..3].repeat(2))),
        6 => (channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        _ => return None,
    };
    match parsed {
        (Ok(r), Ok(g), Ok(b)) => Some((r, g, b)),
        _ => None,
    }
}

/// Normalize a colour to canonical lowercase `#rrggbb`, using `fallback` when
/// `value` does not parse (and the built-in fallback when neither does).
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let (r, g, b) = parse_hex_rgb(value)
        .or_else(|| parse_hex_rgb(fallback))
        .or_else(|| parse_hex_rgb(FALLBACK_TIER_COLOR))
        .unwrap_or((99, 110, 114));
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Pick white or near-black label text for legibility on `background`.
#[must_use]
pub fn contrast_text_color(background: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex_rgb(background) else {
        return "#ffffff";
    };
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luma > 186.0 { "#1f2937" } else { "#ffffff" }
}
