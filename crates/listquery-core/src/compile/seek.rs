use crate::{
    cursor::CursorPayload,
    definition::{ColumnRef, SortDirection},
    predicate::Predicate,
};

/// Build the keyset predicate selecting rows strictly after `boundary`.
///
/// desc: `(column < v) OR (column = v AND identity < id)`
/// asc:  `(column > v) OR (column = v AND identity > id)`
///
/// Rows sharing the boundary value are split by identity, so the result is
/// independent of how many rows tie on `column`.
#[must_use]
pub(super) fn seek_predicate(
    column: ColumnRef,
    identity: ColumnRef,
    direction: SortDirection,
    boundary: CursorPayload,
) -> Predicate {
    let CursorPayload { value, id } = boundary;

    match direction {
        SortDirection::Desc => {
            Predicate::lt(column, value.clone())
                | (Predicate::eq(column, value) & Predicate::lt(identity, id))
        }
        SortDirection::Asc => {
            Predicate::gt(column, value.clone())
                | (Predicate::eq(column, value) & Predicate::gt(identity, id))
        }
    }
}
