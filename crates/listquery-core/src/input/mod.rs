//! Module: input
//! Responsibility: turn a wire-format list request into a validated `ListQueryInput`.
//! Does not own: cursor token decoding (deferred to compilation) or ordering rules.
//! Boundary: every rejection here is caller-correctable and surfaces as a 4xx.

mod request;


use crate::{
    definition::{ListQueryDefinition, SortColumn, SortSpec},
    policy::PaginationPolicy,
};
use derive_more::Display;
use thiserror::Error as ThisError;

// re-exports
pub use request::{ListQueryRequest, PaginationRequest, SortRequest};

///
/// ValidationError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("cursor limit {limit} is out of range (expected 1..={max})")]
    LimitOutOfRange { limit: i64, max: u32 },

    #[error("page {page} is out of range (expected >= 1)")]
    PageOutOfRange { page: i64 },

    #[error("page size {page_size} is out of range (expected 1..={max})")]
    PageSizeOutOfRange { page_size: i64, max: u32 },

    #[error("unknown sort column '{column}'")]
    UnknownSortColumn { column: String },

    #[error("cursor mode does not support multiple sort columns (found {count})")]
    CursorMultiSort { count: usize },

    #[error("malformed list query request: {reason}")]
    Malformed { reason: String },
}

///
/// PaginationMode
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum PaginationMode {
    #[display("cursor")]
    Cursor,
    #[display("offset")]
    Offset,
}

///
/// Pagination
///
/// Validated pagination window with every default applied.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Pagination {
    Cursor { limit: u32, cursor: Option<String> },
    Offset { page: u32, page_size: u32 },
}

impl Pagination {
    #[must_use]
    pub const fn mode(&self) -> PaginationMode {
        match self {
            Self::Cursor { .. } => PaginationMode::Cursor,
            Self::Offset { .. } => PaginationMode::Offset,
        }
    }

    /// Number of rows the caller receives per page.
    #[must_use]
    pub const fn page_limit(&self) -> u32 {
        match self {
            Self::Cursor { limit, .. } => *limit,
            Self::Offset { page_size, .. } => *page_size,
        }
    }

    fn from_request(
        request: Option<PaginationRequest>,
        policy: &PaginationPolicy,
    ) -> Result<Self, ValidationError> {
        match request {
            None => Ok(Self::Cursor {
                limit: policy.default_limit,
                cursor: None,
            }),
            Some(PaginationRequest::Cursor { limit, cursor }) => {
                let limit = match limit {
                    None => policy.default_limit,
                    Some(limit) => bounded(limit, policy.max_limit).ok_or(
                        ValidationError::LimitOutOfRange {
                            limit,
                            max: policy.max_limit,
                        },
                    )?,
                };
                let cursor = cursor.filter(|token| !token.is_empty());

                Ok(Self::Cursor { limit, cursor })
            }
            Some(PaginationRequest::Offset { page, page_size }) => {
                let page = match page {
                    None => 1,
                    Some(page) => bounded(page, u32::MAX)
                        .ok_or(ValidationError::PageOutOfRange { page })?,
                };
                let page_size = match page_size {
                    None => policy.default_page_size,
                    Some(page_size) => bounded(page_size, policy.max_page_size).ok_or(
                        ValidationError::PageSizeOutOfRange {
                            page_size,
                            max: policy.max_page_size,
                        },
                    )?,
                };

                Ok(Self::Offset { page, page_size })
            }
        }
    }
}

// Accept `value` only inside `1..=max`; out-of-range input is rejected, never clamped.
fn bounded(value: i64, max: u32) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .filter(|value| (1..=max).contains(value))
}

///
/// ListQueryInput
///
/// Validated list request: one pagination window plus zero or more sort
/// instructions. In cursor mode at most one sort instruction is allowed.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListQueryInput<C> {
    pagination: Pagination,
    sort: Vec<SortSpec<C>>,
}

impl<C: SortColumn> ListQueryInput<C> {
    /// Build an input from already-typed parts, enforcing the cursor-mode
    /// single-sort rule.
    ///
    /// Sort columns are not checked against the sortable set here; typed
    /// server-side inputs are resolved during compilation.
    pub fn new(pagination: Pagination, sort: Vec<SortSpec<C>>) -> Result<Self, ValidationError> {
        if matches!(pagination, Pagination::Cursor { .. }) && sort.len() > 1 {
            return Err(ValidationError::CursorMultiSort { count: sort.len() });
        }

        Ok(Self { pagination, sort })
    }

    /// Validate a wire request against one list definition.
    pub fn validate(
        request: ListQueryRequest,
        definition: &ListQueryDefinition<C>,
    ) -> Result<Self, ValidationError> {
        let pagination = Pagination::from_request(request.pagination, definition.policy())?;
        let sort = request
            .sort
            .unwrap_or_default()
            .into_iter()
            .map(|spec| {
                C::from_name(&spec.column)
                    .map(|column| SortSpec::new(column, spec.direction))
                    .ok_or_else(|| ValidationError::UnknownSortColumn {
                        column: spec.column,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(pagination, sort)
    }

    /// Parse and validate a JSON request body.
    pub fn from_json(
        json: &str,
        definition: &ListQueryDefinition<C>,
    ) -> Result<Self, ValidationError> {
        Self::validate(ListQueryRequest::from_json(json)?, definition)
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn sort(&self) -> &[SortSpec<C>] {
        &self.sort
    }
}
