//! Module: exec
//! Responsibility: in-memory reference evaluation of a `CompiledQuery` over `Row` slices.
//! Does not own: compilation or any real storage access.
//! Boundary: defines the semantics storage adapters must reproduce; used by tests and fixtures.

use crate::{
    compile::{CompiledQuery, OrderSpec},
    definition::SortColumn,
    predicate::{Predicate, Row, eval_predicate},
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

/// Stable lexicographic sort of `rows` under `ordering`.
///
/// Missing values compare below present ones, so they lead in ascending order
/// and trail in descending order.
pub fn apply_ordering<R: Row>(rows: &mut [R], ordering: &OrderSpec) {
    rows.sort_by(|left, right| compare_rows(left, right, ordering));
}

// Compare two rows according to the ordering, returning the first non-equal field ordering.
fn compare_rows<R: Row>(left: &R, right: &R, ordering: &OrderSpec) -> Ordering {
    for (column, direction) in &ordering.fields {
        let cmp = compare_slots(left.field(*column).as_ref(), right.field(*column).as_ref());
        let cmp = direction.apply(cmp);

        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    Ordering::Equal
}

fn compare_slots(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => canonical_cmp(left, right),
    }
}

/// Run `compiled` over `rows`: filter by the seek predicate, order, skip the
/// offset, and take `limit` rows (including any cursor lookahead row).
#[must_use]
pub fn execute<C, R>(rows: &[R], compiled: &CompiledQuery<C>) -> Vec<R>
where
    C: SortColumn,
    R: Row + Clone,
{
    execute_filtered(rows, compiled, None)
}

/// Like [`execute`], with a caller-side filter conjoined to the seek predicate.
#[must_use]
pub fn execute_filtered<C, R>(
    rows: &[R],
    compiled: &CompiledQuery<C>,
    filter: Option<Predicate>,
) -> Vec<R>
where
    C: SortColumn,
    R: Row + Clone,
{
    let predicate = compiled.where_clause(filter);
    let mut matched: Vec<R> = rows
        .iter()
        .filter(|row| predicate.as_ref().is_none_or(|p| eval_predicate(*row, p)))
        .cloned()
        .collect();

    apply_ordering(&mut matched, compiled.ordering());

    let skip = compiled
        .offset()
        .map_or(0, |offset| usize::try_from(offset).unwrap_or(usize::MAX));
    let take = usize::try_from(compiled.limit()).unwrap_or(usize::MAX);

    matched.into_iter().skip(skip).take(take).collect()
}

/// Number of rows matching `filter`; the `total` reported by offset pages.
#[must_use]
pub fn count_matching<R: Row>(rows: &[R], filter: Option<&Predicate>) -> u64 {
    let count = rows
        .iter()
        .filter(|row| filter.is_none_or(|p| eval_predicate(*row, p)))
        .count();

    u64::try_from(count).unwrap_or(u64::MAX)
}

///
/// TESTS
///
