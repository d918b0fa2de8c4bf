//! Universe palette as CSS custom properties on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use grid::catalog::Palette;

/// `(property, value)` pairs for a palette.
pub fn css_variables(palette: &Palette) -> [(&'static str, &'static str); 5] {
    [
        ("--universe-primary", palette.primary),
        ("--universe-secondary", palette.secondary),
        ("--universe-accent", palette.accent),
        ("--universe-background", palette.background),
        ("--universe-text", palette.text),
    ]
}

/// Inline style text declaring every palette variable.
pub fn style_text(palette: &Palette) -> String {
    css_variables(palette).iter().map(|(name, value)| format!("{name}: {value};")).collect::<Vec<_>>().join(" ")
}

/// Apply `palette` to the document element, or clear it with `None`.
pub fn apply(palette: Option<&Palette>) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let _ = match palette {
            Some(palette) => el.set_attribute("style", &style_text(palette)),
            None => el.remove_attribute("style"),
        };
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = palette;
    }
}
