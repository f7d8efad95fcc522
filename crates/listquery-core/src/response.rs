//! Module: response
//! Responsibility: list response payload contracts and pagination metadata.
//! Does not own: row fetching or cursor token encoding.
//! Boundary: DTOs serialized straight into API responses (camelCase on the wire).

use serde::{Deserialize, Serialize};

///
/// CursorPageMeta
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPageMeta {
    pub has_next_page: bool,
    pub next_cursor: Option<String>,
}

///
/// OffsetPageMeta
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetPageMeta {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub total: u64,
}

impl OffsetPageMeta {
    /// Build metadata for one offset page; `page_count = ceil(total / page_size)`.
    #[must_use]
    pub const fn new(page: u32, page_size: u32, total: u64) -> Self {
        let page_count = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size as u64)
        };

        Self {
            page,
            page_size,
            page_count,
            total,
        }
    }

    /// True when a later page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        (self.page as u64) < self.page_count
    }
}

///
/// Page
///
/// One page of rows plus its pagination metadata.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page<R, M> {
    data: Vec<R>,
    pagination: M,
}

impl<R, M> Page<R, M> {
    #[must_use]
    pub const fn new(data: Vec<R>, pagination: M) -> Self {
        Self { data, pagination }
    }

    #[must_use]
    pub fn data(&self) -> &[R] {
        &self.data
    }

    #[must_use]
    pub const fn pagination(&self) -> &M {
        &self.pagination
    }

    /// Map every row, keeping the metadata.
    #[must_use]
    pub fn map<T>(self, f: impl FnMut(R) -> T) -> Page<T, M> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    /// Consume this page and return `(data, pagination)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<R>, M) {
        (self.data, self.pagination)
    }
}

///
/// TESTS
///
