//! # client
//!
//! Leptos + WASM frontend for the tier-list builder.
//!
//! This crate contains the pages, container components, application state,
//! character fetching, and the drag host that bridges DOM pointer and
//! keyboard events into the `grid` crate's [`grid::engine::GridCore`].
//! Browser-only code is gated behind the `csr` feature so the pure helpers
//! stay testable natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// mounts [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
