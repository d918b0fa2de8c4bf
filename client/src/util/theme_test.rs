use super::*;

use grid::catalog::Universe;

#[test]
fn css_variables_cover_every_palette_slot() {
    let palette = Universe::Naruto.palette();
    let vars = css_variables(&palette);
    assert_eq!(vars[0], ("--universe-primary", "#FF7800"));
    assert_eq!(vars[4].0, "--universe-text");
}

#[test]
fn style_text_is_a_declaration_list() {
    let text = style_text(&Universe::Pokemon.palette());
    assert!(text.starts_with("--universe-primary: #3B4CCA;"));
    assert_eq!(text.matches(';').count(), 5);
}
