//! Module: compile
//! Responsibility: lower a validated `ListQueryInput` into ordering, seek predicate, and window.
//! Does not own: storage execution or request validation.
//! Boundary: the only place cursor tokens are decoded on the request path.

mod order;
mod seek;


use crate::{
    cursor::{CursorPayload, decode_cursor, encode_cursor},
    definition::{ColumnRef, ListQueryDefinition, SortColumn, SortSpec},
    error::QueryError,
    input::{ListQueryInput, Pagination},
    predicate::{Predicate, Row},
    response::{CursorPageMeta, OffsetPageMeta, Page},
};
use std::{fmt, slice};
use thiserror::Error as ThisError;

// re-exports
pub use order::OrderSpec;

///
/// CompilationError
///
/// Definition/input contract violations detected while compiling.
/// These indicate a server bug, not a bad request.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum CompilationError {
    #[error("sort column '{column}' is not in the sortable set")]
    UnknownSortColumn { column: &'static str },

    #[error("sort column name '{column}' is declared more than once")]
    DuplicateSortColumn { column: &'static str },
}

///
/// CompiledQuery
///
/// Everything a storage engine needs to run one page: the total ordering, the
/// optional seek predicate, and the row window. In cursor mode `limit` is one
/// more than the page size so the lookahead row can signal a further page.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery<C> {
    ordering: OrderSpec,
    predicate: Option<Predicate>,
    limit: u32,
    offset: Option<u64>,
    cursor_sort: Option<SortSpec<C>>,
    page: Option<u32>,
    page_limit: u32,
    identity: ColumnRef,
}

impl<C: SortColumn> CompiledQuery<C> {
    #[must_use]
    pub const fn ordering(&self) -> &OrderSpec {
        &self.ordering
    }

    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    /// Rows to fetch, including the cursor-mode lookahead row.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip; `None` in cursor mode.
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Active single-column sort; `None` in offset mode.
    #[must_use]
    pub const fn cursor_sort(&self) -> Option<SortSpec<C>> {
        self.cursor_sort
    }

    /// Rows returned to the caller per page.
    #[must_use]
    pub const fn page_limit(&self) -> u32 {
        self.page_limit
    }

    #[must_use]
    pub const fn identity(&self) -> ColumnRef {
        self.identity
    }

    /// Conjunction of a caller-side filter and the compiled seek predicate.
    /// Absent parts are dropped.
    #[must_use]
    pub fn where_clause(&self, filter: Option<Predicate>) -> Option<Predicate> {
        Predicate::all([filter, self.predicate.clone()])
    }

    /// Cursor for the page after `rows`, where `rows` are the fetched rows.
    #[must_use]
    pub fn next_cursor<R: Row>(&self, rows: &[R]) -> Option<String> {
        compute_next_cursor(rows, self.page_limit, self.cursor_sort, self.identity)
    }

    /// Trim the lookahead row and attach cursor metadata.
    #[must_use]
    pub fn into_cursor_page<R: Row>(&self, mut rows: Vec<R>) -> Page<R, CursorPageMeta> {
        let next_cursor = self.next_cursor(&rows);
        let page_limit = usize::try_from(self.page_limit).unwrap_or(usize::MAX);
        let has_next_page = rows.len() > page_limit;
        rows.truncate(page_limit);

        Page::new(
            rows,
            CursorPageMeta {
                has_next_page,
                next_cursor,
            },
        )
    }

    /// Attach offset metadata; `total` is the unpaged match count.
    #[must_use]
    pub fn into_offset_page<R>(&self, rows: Vec<R>, total: u64) -> Page<R, OffsetPageMeta> {
        let page = self.page.unwrap_or(1);

        Page::new(rows, OffsetPageMeta::new(page, self.page_limit, total))
    }
}

impl<C> fmt::Display for CompiledQuery<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(predicate) = &self.predicate {
            write!(f, "WHERE {predicate} ")?;
        }

        f.write_str("ORDER BY ")?;
        for (i, (column, direction)) in self.ordering.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column} {}", direction.to_string().to_uppercase())?;
        }

        write!(f, " LIMIT {}", self.limit)?;
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }

        Ok(())
    }
}

/// Compile a validated input against its definition.
///
/// Cursor tokens are decoded here; a bad token is a rejected request
/// (`QueryError::Decode`). A sort column missing from the sortable set is a
/// contract bug (`QueryError::Compilation`).
pub fn compile<C: SortColumn>(
    input: &ListQueryInput<C>,
    definition: &ListQueryDefinition<C>,
) -> Result<CompiledQuery<C>, QueryError> {
    let default_sort = definition.default_sort();
    let sorts = if input.sort().is_empty() {
        slice::from_ref(&default_sort)
    } else {
        input.sort()
    };
    let identity = definition.identity();

    let compiled = match input.pagination() {
        Pagination::Cursor { limit, cursor } => {
            let active = sorts.first().copied().unwrap_or(default_sort);
            let column = definition.resolve(active.column).map_err(compilation_failed)?;
            let ordering = order::cursor_ordering(column, identity, active.direction);

            let predicate = match cursor {
                Some(token) => {
                    let boundary = decode_cursor(token).inspect_err(|err| {
                        tracing::debug!(error = %err, "rejected cursor token");
                    })?;
                    Some(seek::seek_predicate(
                        column,
                        identity,
                        active.direction,
                        boundary,
                    ))
                }
                None => None,
            };

            CompiledQuery {
                ordering,
                predicate,
                limit: limit.saturating_add(1),
                offset: None,
                cursor_sort: Some(active),
                page: None,
                page_limit: *limit,
                identity,
            }
        }
        Pagination::Offset { page, page_size } => {
            let ordering = order::offset_ordering(definition, sorts).map_err(compilation_failed)?;
            let offset = u64::from(page.saturating_sub(1)) * u64::from(*page_size);

            CompiledQuery {
                ordering,
                predicate: None,
                limit: *page_size,
                offset: Some(offset),
                cursor_sort: None,
                page: Some(*page),
                page_limit: *page_size,
                identity,
            }
        }
    };

    tracing::debug!(
        mode = %input.pagination().mode(),
        active_sort = compiled.cursor_sort.map(|sort| sort.column.name()),
        limit = compiled.limit,
        offset = compiled.offset,
        seek = compiled.predicate.is_some(),
        "compiled list query",
    );

    Ok(compiled)
}

fn compilation_failed(err: CompilationError) -> QueryError {
    tracing::error!(error = %err, "list query compilation failed");

    err.into()
}

/// Compute the cursor for the page following `rows`.
///
/// `rows` are the fetched rows, up to `page_limit + 1`. The boundary is the
/// last row handed to the caller (`rows[page_limit - 1]`), and a cursor exists
/// only when the lookahead row proves there is more. Returns `None` in offset
/// mode, when no further page exists, or when the boundary row lacks its sort
/// value or identity. Never fails.
#[must_use]
pub fn compute_next_cursor<C: SortColumn, R: Row>(
    rows: &[R],
    page_limit: u32,
    cursor_sort: Option<SortSpec<C>>,
    identity: ColumnRef,
) -> Option<String> {
    let active = cursor_sort?;
    let page_limit = usize::try_from(page_limit).ok()?;
    if rows.len() <= page_limit {
        return None;
    }

    let boundary = rows.get(page_limit.checked_sub(1)?)?;
    match (boundary.field(active.column.column()), boundary.field(identity)) {
        (Some(value), Some(id)) => Some(encode_cursor(&CursorPayload { value, id })),
        (value, id) => {
            tracing::trace!(
                column = active.column.name(),
                has_value = value.is_some(),
                has_id = id.is_some(),
                "boundary row has no cursor value",
            );
            None
        }
    }
}
