//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `config` is app-wide and provided by `App`; `tier_list` is page-scoped and
//! provided by `TierListPage` next to the `GridCore` signal it describes.

pub mod config;
pub mod tier_list;
