use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_tiers_are_s_through_f() {
    let tiers = default_tiers();
    let ids: Vec<&str> = tiers.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["S", "A", "B", "C", "D", "F"]);
    assert_eq!(tiers[0].label, "S");
    assert_eq!(tiers[0].color, "#FF7675");
}

#[test]
fn palette_cycles() {
    assert_eq!(palette_color(0), palette_color(TIER_PALETTE.len()));
    assert_ne!(palette_color(0), palette_color(1));
}

// =============================================================
// Colour parsing
// =============================================================

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#ééé"), None);
}

#[test]
fn normalize_hex_color_uses_canonical_lowercase() {
    assert_eq!(normalize_hex_color("#FF0000", "#000000"), "#ff0000");
    assert_eq!(normalize_hex_color("#ABC", "#000000"), "#aabbcc");
}

#[test]
fn normalize_hex_color_falls_back() {
    assert_eq!(normalize_hex_color("red", "#00ff00"), "#00ff00");
    assert_eq!(normalize_hex_color("red", "green"), "#636e72");
}

#[test]
fn contrast_text_color_depends_on_luma() {
    assert_eq!(contrast_text_color("#ffffff"), "#1f2937");
    assert_eq!(contrast_text_color("#000000"), "#ffffff");
    assert_eq!(contrast_text_color("nonsense"), "#ffffff");
}
