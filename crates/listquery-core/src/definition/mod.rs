//! Module: definition
//! Responsibility: per-entity list declarations (identity, sortable set, default sort).
//! Does not own: request validation or query compilation.
//! Boundary: definitions are built once, usually in a `const`, and shared by every request.

mod column;
mod sort;


use crate::{
    compile::CompilationError,
    policy::{PaginationPolicy, PolicyError},
};
use std::collections::BTreeSet;

// re-exports
pub use column::{ColumnRef, SortColumn};
pub use sort::{SortDirection, SortSpec};

///
/// ListQueryDefinition
///
/// Immutable description of one listable entity: the identity column used as
/// the universal tie-breaker, the sortable columns (`C::ALL`), the default
/// sort, and the pagination policy applied to requests.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListQueryDefinition<C> {
    identity: ColumnRef,
    default_sort: SortSpec<C>,
    policy: PaginationPolicy,
}

impl<C: SortColumn> ListQueryDefinition<C> {
    #[must_use]
    pub const fn new(identity: ColumnRef, default_sort: SortSpec<C>) -> Self {
        Self {
            identity,
            default_sort,
            policy: PaginationPolicy::DEFAULT,
        }
    }

    /// Replace the pagination policy applied to requests for this entity.
    /// The policy is validated first; an invalid one is never installed.
    pub fn with_policy(self, policy: PaginationPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;

        Ok(Self { policy, ..self })
    }

    #[must_use]
    pub const fn identity(&self) -> ColumnRef {
        self.identity
    }

    #[must_use]
    pub const fn default_sort(&self) -> SortSpec<C> {
        self.default_sort
    }

    #[must_use]
    pub const fn policy(&self) -> &PaginationPolicy {
        &self.policy
    }

    /// The exposed sortable set.
    #[must_use]
    pub const fn sortable(&self) -> &'static [C] {
        C::ALL
    }

    /// Resolve one sort column to its storage column.
    pub fn resolve(&self, column: C) -> Result<ColumnRef, CompilationError> {
        if column.is_sortable() {
            Ok(column.column())
        } else {
            Err(CompilationError::UnknownSortColumn {
                column: column.name(),
            })
        }
    }

    /// Check the declaration itself: the default sort must be exposed and
    /// logical names must be unique.
    pub fn validate(&self) -> Result<(), CompilationError> {
        self.resolve(self.default_sort.column)?;

        let mut seen = BTreeSet::new();
        for column in C::ALL {
            if !seen.insert(column.name()) {
                return Err(CompilationError::DuplicateSortColumn {
                    column: column.name(),
                });
            }
        }

        Ok(())
    }
}
