//! Module: cursor
//! Responsibility: opaque continuation tokens for keyset pagination.
//! Does not own: seek predicate construction or boundary row selection.
//! Boundary: tokens cross the network; they carry no server-side state.

mod codec;
mod wire;


use crate::value::Value;

// re-exports
pub use codec::{CursorDecodeError, MAX_CURSOR_TOKEN_LEN, decode_cursor, encode_cursor};

///
/// CursorPayload
///
/// Seek position at a page boundary: the active sort column value and the
/// identity value of the last row returned to the caller. Both keep their
/// variant, so numeric primary keys seek as numbers.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CursorPayload {
    pub value: Value,
    pub id: Value,
}

impl CursorPayload {
    #[must_use]
    pub fn new(value: impl Into<Value>, id: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            id: id.into(),
        }
    }

    /// Encode this payload as an opaque URL-safe token.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_cursor(self)
    }

    /// Decode an opaque token produced by [`CursorPayload::encode`].
    pub fn decode(token: &str) -> Result<Self, CursorDecodeError> {
        decode_cursor(token)
    }
}
