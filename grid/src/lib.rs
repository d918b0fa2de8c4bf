//! Tier-list assignment and drag engine.
//!
//! This crate is compiled into the browser client but has no browser
//! dependencies of its own. It owns the full lifecycle of a tier list:
//! partitioning characters into containers, translating pointer and keyboard
//! gestures into store mutations, resolving collision targets, and producing
//! the exportable layout. The host UI layer is responsible only for wiring
//! DOM events to the engine, measuring droppable regions, and rendering the
//! resulting state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::GridCore`] combining store, drag, and characters |
//! | [`store`] | Assignment map and tier metadata with atomic, invariant-preserving moves |
//! | [`drag`] | Drag session state machine (pointer and keyboard sensors) |
//! | [`collision`] | Two-phase collision detection against droppable regions |
//! | [`geometry`] | Points and rectangles in client (CSS pixel) space |
//! | [`container`] | Container identifiers (`pool`, `unknown`, tiers) |
//! | [`tier`] | Tier metadata, defaults, and colour normalization |
//! | [`character`] | Character records and the unknown-classification policy |
//! | [`catalog`] | Universe table: filter schemas, palettes, fallback datasets |
//! | [`layout`] | Export/share snapshot and its URL codec |
//! | [`error`] | Error types for fallible decoding |
//! | [`consts`] | Shared constants (activation distance, defaults, reserved keys) |

pub mod catalog;
pub mod character;
pub mod collision;
pub mod consts;
pub mod container;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod store;
pub mod tier;
