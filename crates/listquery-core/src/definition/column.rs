use derive_more::Display;
use std::fmt::Debug;

///
/// ColumnRef
/// Reference to one underlying storage column by its physical name.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ColumnRef(&'static str);

impl ColumnRef {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

///
/// SortColumn
///
/// Compile-time table of the columns a list endpoint may sort by.
/// Implemented by a fieldless enum, usually through [`sort_columns!`](crate::sort_columns).
///
/// `ALL` is the exposed sortable set: request validation resolves external
/// names only against it, and compilation rejects any variant missing from it.
///

pub trait SortColumn: Copy + Debug + Eq + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Logical name used on the wire.
    fn name(self) -> &'static str;

    /// Underlying storage column.
    fn column(self) -> ColumnRef;

    /// Resolve an externally supplied logical name.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|column| column.name() == name)
    }

    #[must_use]
    fn is_sortable(self) -> bool {
        Self::ALL.contains(&self)
    }
}
