//! Pagination policy configuration.
//!
//! A policy bounds what a request may ask for. Definitions carry
//! [`PaginationPolicy::DEFAULT`] unless a deployment overrides it, typically by
//! deserializing a partial config document where absent keys keep defaults.

use crate::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// PolicyError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PolicyError {
    #[error("pagination policy field '{field}' must be at least 1")]
    ZeroBound { field: &'static str },

    #[error("pagination policy default '{field}' ({value}) exceeds its maximum ({max})")]
    DefaultExceedsMaximum {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("malformed pagination policy: {reason}")]
    Malformed { reason: String },
}

///
/// PaginationPolicy
///
/// Defaults and upper bounds for cursor limits and offset page sizes.
/// Bounds are inclusive; requests outside them are rejected, never clamped.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationPolicy {
    pub default_limit: u32,
    pub max_limit: u32,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl PaginationPolicy {
    pub const DEFAULT: Self = Self {
        default_limit: DEFAULT_PAGE_LIMIT,
        max_limit: MAX_PAGE_LIMIT,
        default_page_size: DEFAULT_PAGE_LIMIT,
        max_page_size: MAX_PAGE_LIMIT,
    };

    /// Parse and validate a JSON policy document.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json).map_err(|err| PolicyError::Malformed {
            reason: err.to_string(),
        })?;
        policy.validate()?;

        Ok(policy)
    }

    pub const fn validate(&self) -> Result<(), PolicyError> {
        if self.max_limit == 0 {
            return Err(PolicyError::ZeroBound { field: "max_limit" });
        }
        if self.max_page_size == 0 {
            return Err(PolicyError::ZeroBound {
                field: "max_page_size",
            });
        }
        if self.default_limit == 0 {
            return Err(PolicyError::ZeroBound {
                field: "default_limit",
            });
        }
        if self.default_page_size == 0 {
            return Err(PolicyError::ZeroBound {
                field: "default_page_size",
            });
        }
        if self.default_limit > self.max_limit {
            return Err(PolicyError::DefaultExceedsMaximum {
                field: "default_limit",
                value: self.default_limit,
                max: self.max_limit,
            });
        }
        if self.default_page_size > self.max_page_size {
            return Err(PolicyError::DefaultExceedsMaximum {
                field: "default_page_size",
                value: self.default_page_size,
                max: self.max_page_size,
            });
        }

        Ok(())
    }
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

///
/// TESTS
///
