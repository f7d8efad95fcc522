use crate::{
    compile::CompilationError,
    definition::{ColumnRef, ListQueryDefinition, SortColumn, SortDirection, SortSpec},
};

///
/// OrderSpec
/// Resolved ordering handed to the storage engine, most significant first.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OrderSpec {
    pub fields: Vec<(ColumnRef, SortDirection)>,
}

impl OrderSpec {
    /// True when the identity column participates, which makes the order total.
    #[must_use]
    pub fn is_total(&self, identity: ColumnRef) -> bool {
        self.fields.iter().any(|(column, _)| *column == identity)
    }

    #[must_use]
    pub fn last(&self) -> Option<(ColumnRef, SortDirection)> {
        self.fields.last().copied()
    }
}

// Cursor ordering: the active column, then identity in the same direction so
// the seek predicate and the ordering describe one lexicographic order.
pub(super) fn cursor_ordering(
    column: ColumnRef,
    identity: ColumnRef,
    direction: SortDirection,
) -> OrderSpec {
    OrderSpec {
        fields: vec![(column, direction), (identity, direction)],
    }
}

// Offset ordering: every sort in caller order, then an identity tie-breaker in
// the last sort's direction unless one of the sorts already is the identity.
pub(super) fn offset_ordering<C: SortColumn>(
    definition: &ListQueryDefinition<C>,
    sorts: &[SortSpec<C>],
) -> Result<OrderSpec, CompilationError> {
    let mut fields = Vec::with_capacity(sorts.len() + 1);
    for sort in sorts {
        fields.push((definition.resolve(sort.column)?, sort.direction));
    }

    let identity = definition.identity();
    let has_identity = fields.iter().any(|(column, _)| *column == identity);

    if !has_identity {
        let direction = sorts
            .last()
            .map_or(definition.default_sort().direction, |sort| sort.direction);
        fields.push((identity, direction));
    }

    Ok(OrderSpec { fields })
}
