mod compare;


use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp};

///
/// Value
///
/// Scalar carried by cursor boundaries, seek predicates, and rows.
/// The variant is the type tag; it is never inferred from the payload.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
}

impl Value {
    /// Canonical tag for this variant.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Text(_) => ValueTag::String,
            Self::Number(_) => ValueTag::Number,
            Self::Date(_) => ValueTag::Date,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "'{text}'"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Date(date) => write!(f, "'{}'", date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

///
/// ValueTag
///
/// Stable type tag written into cursor tokens.
///
/// IMPORTANT:
/// Wire labels are part of the token format and must not change.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueTag {
    #[display("string")]
    String,
    #[display("number")]
    Number,
    #[display("date")]
    Date,
}

impl ValueTag {
    /// Ordering rank used when comparing values of different variants.
    #[must_use]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Number => 0,
            Self::Date => 1,
            Self::String => 2,
        }
    }
}
