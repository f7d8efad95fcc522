//! ## Crate layout
//! - `core`: request validation, the keyset compiler, the cursor codec, and the
//!   in-memory reference evaluator.
//!
//! The `prelude` module carries the vocabulary a list endpoint needs: declare
//! a sort table with [`sort_columns!`], a [`ListQueryDefinition`](core::definition::ListQueryDefinition)
//! per entity, then [`compile_json`] each request body.

pub use listquery_core as core;

// re-exports
pub use listquery_core::sort_columns;

use listquery_core::{
    compile::{CompiledQuery, compile},
    definition::{ListQueryDefinition, SortColumn},
    error::QueryError,
    input::ListQueryInput,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate a JSON request body and compile it against `definition`.
pub fn compile_json<C: SortColumn>(
    json: &str,
    definition: &ListQueryDefinition<C>,
) -> Result<CompiledQuery<C>, QueryError> {
    let input = ListQueryInput::from_json(json, definition)?;

    compile(&input, definition)
}

///
/// Prelude
/// Endpoint-facing vocabulary plus serde derives for row types.
///

pub mod prelude {
    pub use crate::{compile_json, core::prelude::*, sort_columns};
    pub use serde::{Deserialize, Serialize};
}
