//! Container identifiers.
//!
//! A container is a named, ordered sequence of character ids. The pool and
//! the unknown area always exist; every tier owns exactly one container that
//! shares the tier's id. On the wire a container is addressed by its map key:
//! `"pool"`, `"unknown"`, or the tier id.

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

use std::fmt;

use crate::consts::{POOL_KEY, UNKNOWN_KEY};

/// Identifier of a tier and of the container backing it.
pub type TierId = String;

/// Which container a character sequence belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerId {
    /// Default holding area for everything not yet ranked.
    Pool,
    /// Holding area for characters the source could not classify.
    Unknown,
    /// The container backing a user-defined tier.
    Tier(TierId),
}

impl ContainerId {
    #[must_use]
    pub fn tier(id: impl Into<String>) -> Self {
        Self::Tier(id.into())
    }

    /// Parse an assignment-map key. Anything that is not a reserved key names a tier.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            POOL_KEY => Self::Pool,
            UNKNOWN_KEY => Self::Unknown,
            other => Self::Tier(other.to_owned()),
        }
    }

    /// The assignment-map key for this container.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Pool => POOL_KEY,
            Self::Unknown => UNKNOWN_KEY,
            Self::Tier(id) => id,
        }
    }

    #[must_use]
    pub fn tier_id(&self) -> Option<&str> {
        match self {
            Self::Tier(id) => Some(id),
            Self::Pool | Self::Unknown => None,
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whether `key` collides with the pool or unknown container keys.
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    key == POOL_KEY || key == UNKNOWN_KEY
}
