//! Dark mode preference: read, apply, toggle.
//!
//! The preference lives in `localStorage` and shows up as a `data-theme`
//! attribute on `<html>`. Outside the browser every call is a no-op so the
//! rest of the client can call these unconditionally.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "tiersaga_dark";

/// Stored preference, else the system colour scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference, apply it, and persist it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}

/// `data-theme` value for a preference.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}
