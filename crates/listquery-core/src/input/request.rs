use crate::{definition::SortDirection, input::ValidationError};
use serde::{Deserialize, Serialize};

///
/// ListQueryRequest
///
/// Loosely-typed list request as it arrives on the wire.
/// Numeric fields are signed so out-of-range values reach validation instead
/// of failing inside the JSON parser. Unknown top-level keys (for example
/// endpoint-specific `filters`) are ignored.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<SortRequest>>,
}

impl ListQueryRequest {
    /// Parse a JSON request body.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|err| ValidationError::Malformed {
            reason: err.to_string(),
        })
    }

    /// Cursor-mode request.
    #[must_use]
    pub fn cursor(limit: Option<i64>, cursor: Option<String>) -> Self {
        Self {
            pagination: Some(PaginationRequest::Cursor { limit, cursor }),
            sort: None,
        }
    }

    /// Offset-mode request.
    #[must_use]
    pub fn offset(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            pagination: Some(PaginationRequest::Offset { page, page_size }),
            sort: None,
        }
    }

    /// Append one sort instruction.
    #[must_use]
    pub fn sort_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.get_or_insert_with(Vec::new).push(SortRequest {
            column: column.into(),
            direction,
        });
        self
    }
}

///
/// PaginationRequest
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PaginationRequest {
    Cursor {
        #[serde(default)]
        limit: Option<i64>,
        #[serde(default)]
        cursor: Option<String>,
    },
    Offset {
        #[serde(default)]
        page: Option<i64>,
        #[serde(default, rename = "pageSize")]
        page_size: Option<i64>,
    },
}

///
/// SortRequest
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SortRequest {
    pub column: String,
    pub direction: SortDirection,
}
