//! Core runtime for listquery: the keyset pagination compiler, the opaque
//! cursor codec, request validation, and the in-memory reference evaluator.
//!
//! Every surface in this crate is pure. Nothing here performs I/O or holds
//! shared mutable state; storage engines consume [`compile::CompiledQuery`]
//! and hand fetched rows back for cursor computation.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub mod compile;
pub mod cursor;
pub mod definition;
pub mod error;
pub mod exec;
pub mod input;
pub mod policy;
pub mod predicate;
pub mod response;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Page size applied when a request names no limit.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;

/// Largest page a single request may ask for, in either pagination mode.
pub const MAX_PAGE_LIMIT: u32 = 128;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, evaluators, or codec internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        compile::{CompiledQuery, compile},
        definition::{ColumnRef, ListQueryDefinition, SortColumn, SortDirection, SortSpec},
        input::{ListQueryInput, ListQueryRequest, Pagination},
        predicate::{Predicate, Row},
        response::{CursorPageMeta, OffsetPageMeta, Page},
        value::Value,
    };
}
