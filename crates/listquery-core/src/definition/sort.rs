use crate::definition::SortColumn;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

///
/// SortSpec
/// One requested sort instruction over a declared sortable column.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SortSpec<C> {
    pub column: C,
    pub direction: SortDirection,
}

impl<C: SortColumn> SortSpec<C> {
    #[must_use]
    pub const fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    #[must_use]
    pub const fn asc(column: C) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    #[must_use]
    pub const fn desc(column: C) -> Self {
        Self::new(column, SortDirection::Desc)
    }
}
