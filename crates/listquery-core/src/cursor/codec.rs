//! Cursor codec helpers.
//!
//! This module owns the opaque wire-token format used for continuation cursors:
//! base64url (no padding) over compact JSON `{ value, type, id }`.
//! It contains only token encoding/decoding logic and no query semantics.

use crate::{
    cursor::{CursorPayload, wire::CursorPayloadWire},
    value::ValueTag,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error as ThisError;

/// Decode bound for untrusted cursor token input.
pub const MAX_CURSOR_TOKEN_LEN: usize = 8 * 1024;

///
/// CursorDecodeError
///
/// Every way a client-supplied token can fail to decode.
/// Low-level base64/JSON failures never escape as anything else.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorDecodeError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token is not valid base64url: {reason}")]
    InvalidEncoding { reason: String },

    #[error("cursor token payload is invalid: {reason}")]
    InvalidPayload { reason: String },

    #[error("cursor value '{value}' is not a valid {tag}")]
    InvalidValue { tag: ValueTag, value: String },
}

impl CursorDecodeError {
    pub(crate) fn invalid_encoding(reason: impl ToString) -> Self {
        Self::InvalidEncoding {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_payload(reason: impl ToString) -> Self {
        Self::InvalidPayload {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_value(tag: ValueTag, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            tag,
            value: value.into(),
        }
    }
}

/// Encode a cursor payload as an opaque URL-safe token.
///
/// Dates are written at millisecond precision. Storage columns with finer
/// precision will seek from the truncated boundary.
#[must_use]
pub fn encode_cursor(payload: &CursorPayload) -> String {
    let wire = CursorPayloadWire::from_payload(payload);

    let json = serde_json::to_vec(&wire).expect("cursor wire payload serialize");

    URL_SAFE_NO_PAD.encode(json)
}

/// Decode an opaque cursor token back into its typed payload.
///
/// The token may include surrounding whitespace, which is trimmed.
pub fn decode_cursor(token: &str) -> Result<CursorPayload, CursorDecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(CursorDecodeError::Empty);
    }

    if token.len() > MAX_CURSOR_TOKEN_LEN {
        return Err(CursorDecodeError::TooLong {
            len: token.len(),
            max: MAX_CURSOR_TOKEN_LEN,
        });
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(CursorDecodeError::invalid_encoding)?;
    let wire: CursorPayloadWire =
        serde_json::from_slice(&bytes).map_err(CursorDecodeError::invalid_payload)?;

    wire.into_payload()
}
