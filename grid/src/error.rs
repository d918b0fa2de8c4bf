//! Errors raised while decoding shared or imported layouts.

use thiserror::Error;

/// Failure to turn an external payload into a [`crate::layout::SharedLayout`].
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The share parameter was not valid percent-encoded UTF-8.
    #[error("failed to percent-decode layout: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    /// The payload was not the expected JSON shape.
    #[error("failed to parse layout JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The payload parsed but carries no `tiers`/`characterMap` pair.
    #[error("layout has no tier assignment to restore")]
    MissingLayout,
}
