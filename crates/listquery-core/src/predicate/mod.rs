//! Boolean tree over column comparisons, as produced by the seek step of the
//! compiler. It carries no storage semantics: engines translate it into their
//! own query-builder primitives, and the reference evaluator interprets it
//! over in-memory rows.

mod eval;

use crate::{definition::ColumnRef, value::Value};
use derive_more::Display;
use std::{
    fmt,
    ops::{BitAnd, BitOr},
};

// re-exports
pub use eval::{Row, eval_predicate};

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum CompareOp {
    #[display("=")]
    Eq,
    #[display("<")]
    Lt,
    #[display(">")]
    Gt,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub struct ComparePredicate {
    pub column: ColumnRef,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(column: ColumnRef, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[must_use]
    pub fn eq(column: ColumnRef, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(column, CompareOp::Eq, value))
    }

    #[must_use]
    pub fn lt(column: ColumnRef, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(column, CompareOp::Lt, value))
    }

    #[must_use]
    pub fn gt(column: ColumnRef, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(column, CompareOp::Gt, value))
    }

    /// Conjoin optional parts, dropping absent ones.
    ///
    /// Returns `None` when every part is absent and the lone part unwrapped
    /// when only one remains. Nested conjunctions are flattened, so caller
    /// filters and the compiled seek predicate combine into one `And`.
    #[must_use]
    pub fn all(parts: impl IntoIterator<Item = Option<Self>>) -> Option<Self> {
        let mut flat = Vec::new();
        for part in parts.into_iter().flatten() {
            match part {
                Self::And(children) => flat.extend(children),
                other => flat.push(other),
            }
        }

        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Self::And(flat)),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

// SQL-flavoured rendering for logs and explain output.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(cmp) => write!(f, "{} {} {}", cmp.column, cmp.op, cmp.value),
            Self::And(children) => write_joined(f, children, " AND ", "TRUE"),
            Self::Or(children) => write_joined(f, children, " OR ", "FALSE"),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    children: &[Predicate],
    separator: &str,
    empty: &str,
) -> fmt::Result {
    if children.is_empty() {
        return f.write_str(empty);
    }

    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            f.write_str(separator)?;
        }
        match child {
            Predicate::Compare(_) => write!(f, "{child}")?,
            _ => write!(f, "({child})")?,
        }
    }

    Ok(())
}

///
/// TESTS
///
