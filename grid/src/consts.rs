//! Shared constants for the grid crate.

// ── Drag ────────────────────────────────────────────────────────

/// Minimum pointer travel in CSS pixels before a press becomes a drag.
///
/// Anything shorter is reported as a click so the same card can open its
/// detail view.
pub const ACTIVATION_DISTANCE_PX: f64 = 8.0;

// ── Containers ──────────────────────────────────────────────────

/// Assignment-map key of the unranked pool.
pub const POOL_KEY: &str = "pool";

/// Assignment-map key of the unknown holding area.
pub const UNKNOWN_KEY: &str = "unknown";

// ── Tiers ───────────────────────────────────────────────────────

/// Default tier ranks as `(id, color)`; the label equals the id.
pub const DEFAULT_TIERS: [(&str, &str); 6] = [
    ("S", "#FF7675"),
    ("A", "#FDCB6E"),
    ("B", "#74B9FF"),
    ("C", "#55EFC4"),
    ("D", "#A29BFE"),
    ("F", "#636E72"),
];

/// Colours cycled through for tiers added without an explicit colour.
pub const TIER_PALETTE: [&str; 8] = [
    "#e17055", "#00b894", "#0984e3", "#6c5ce7", "#fdcb6e", "#e84393", "#00cec9", "#b2bec3",
];

/// Fallback when a tier colour cannot be parsed.
pub const FALLBACK_TIER_COLOR: &str = "#636e72";

// ── Sharing ─────────────────────────────────────────────────────

/// Query parameter carrying the percent-encoded layout JSON.
pub const SHARE_PARAM: &str = "data";

/// File name used for the JSON export.
pub const EXPORT_JSON_FILE: &str = "tiersaga-tierlist.json";

/// File name used for the image export.
pub const EXPORT_IMAGE_FILE: &str = "tiersaga-tierlist.png";

/// Language assumed when neither the query nor a shared layout names one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Variant assumed when neither the query nor a shared layout names one.
pub const DEFAULT_VARIANT: &str = "normal";

/// Universe tag given to user-uploaded characters.
pub const CUSTOM_UNIVERSE: &str = "custom";
