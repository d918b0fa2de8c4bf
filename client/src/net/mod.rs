//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches character lists from remote sources and falls back to the
//! offline datasets in `grid::catalog` when a source is missing or fails.

pub mod api;
