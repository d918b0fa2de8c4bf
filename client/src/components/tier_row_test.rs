use super::*;

#[test]
fn label_style_uses_dark_text_on_light_colour() {
    assert_eq!(label_style("#ffff7f"), "background-color: #ffff7f; color: #1f2937");
}

#[test]
fn label_style_uses_light_text_on_dark_colour() {
    assert_eq!(label_style("#1f2937"), "background-color: #1f2937; color: #ffffff");
}
