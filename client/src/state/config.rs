//! Application configuration shared through context.
//!
//! DESIGN
//! ======
//! One `AppConfig` value lives in an `RwSignal` provided by `App`. Updates
//! build a new value with the `with_*` helpers and `set` it, so readers never
//! observe a half-applied change.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use grid::catalog::{Palette, Universe};
use grid::consts::DEFAULT_LANGUAGE;

/// Language, theme, and active universe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub language: String,
    pub dark_mode: bool,
    /// Universe of the open tier list; `None` on the home page.
    pub universe: Option<Universe>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { language: DEFAULT_LANGUAGE.to_owned(), dark_mode: false, universe: None }
    }
}

impl AppConfig {
    #[must_use]
    pub fn with_language(&self, language: &str) -> Self {
        let language = if language.trim().is_empty() { DEFAULT_LANGUAGE } else { language.trim() };
        Self { language: language.to_owned(), ..self.clone() }
    }

    #[must_use]
    pub fn with_dark_mode(&self, dark_mode: bool) -> Self {
        Self { dark_mode, ..self.clone() }
    }

    #[must_use]
    pub fn with_universe(&self, universe: Option<Universe>) -> Self {
        Self { universe, ..self.clone() }
    }

    /// Palette of the active universe, if any.
    pub fn palette(&self) -> Option<Palette> {
        self.universe.map(Universe::palette)
    }
}
