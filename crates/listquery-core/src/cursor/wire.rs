use crate::{
    cursor::{CursorDecodeError, CursorPayload},
    value::{Value, ValueTag},
};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// Expanded-year form written by `to_rfc3339_opts` outside 0000..=9999.
const EXPANDED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

///
/// CursorPayloadWire
///
/// JSON shape inside a cursor token. Every value travels as a string next to
/// its type tag so decode never has to guess the original variant.
/// `idType` is omitted for text identities.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub(super) struct CursorPayloadWire {
    value: String,
    #[serde(rename = "type")]
    tag: ValueTag,
    id: String,
    #[serde(
        rename = "idType",
        default = "text_tag",
        skip_serializing_if = "is_text_tag"
    )]
    id_tag: ValueTag,
}

impl CursorPayloadWire {
    pub(super) fn from_payload(payload: &CursorPayload) -> Self {
        Self {
            value: serialize_value(&payload.value),
            tag: payload.value.tag(),
            id: serialize_value(&payload.id),
            id_tag: payload.id.tag(),
        }
    }

    pub(super) fn into_payload(self) -> Result<CursorPayload, CursorDecodeError> {
        let value = deserialize_value(self.value, self.tag)?;
        let id = deserialize_value(self.id, self.id_tag)?;

        Ok(CursorPayload { value, id })
    }
}

const fn text_tag() -> ValueTag {
    ValueTag::String
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_text_tag(tag: &ValueTag) -> bool {
    *tag == ValueTag::String
}

// Dates serialize at millisecond precision; finer storage precision is truncated.
fn serialize_value(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Date(date) => date.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn deserialize_value(raw: String, tag: ValueTag) -> Result<Value, CursorDecodeError> {
    match tag {
        ValueTag::String => Ok(Value::Text(raw)),
        ValueTag::Number => raw
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| CursorDecodeError::invalid_value(tag, raw)),
        ValueTag::Date => parse_date(&raw)
            .map(Value::Date)
            .ok_or_else(|| CursorDecodeError::invalid_value(tag, raw)),
    }
}

// RFC 3339 first; years outside 0000..=9999 carry a sign and more digits,
// which the RFC 3339 parser rejects.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw.strip_suffix('Z')?, EXPANDED_DATE_FORMAT)
        .ok()
        .map(|date| date.and_utc())
}
