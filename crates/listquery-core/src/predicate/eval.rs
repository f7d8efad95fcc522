use crate::{
    definition::ColumnRef,
    predicate::{CompareOp, ComparePredicate, Predicate},
    value::{Value, strict_order_cmp},
};
use std::cmp::Ordering;

///
/// Row
///
/// Abstraction over a fetched row that can expose column values.
/// `None` means the column is absent (or NULL) on this row.
///

pub trait Row {
    fn field(&self, column: ColumnRef) -> Option<Value>;
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, column: ColumnRef) -> Option<Value> {
        (**self).field(column)
    }
}

///
/// Evaluate a predicate against a single row.
///
/// Comparisons against an absent column or a value of a different variant
/// evaluate to `false`, matching SQL's treatment of NULL in a WHERE clause.
///
#[must_use]
pub fn eval_predicate<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| eval_predicate(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval_predicate(row, child)),
        Predicate::Compare(cmp) => eval_compare(row, cmp),
    }
}

fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let Some(actual) = row.field(cmp.column) else {
        return false;
    };

    strict_order_cmp(&actual, &cmp.value).is_some_and(|ordering| match cmp.op {
        CompareOp::Eq => ordering == Ordering::Equal,
        CompareOp::Lt => ordering == Ordering::Less,
        CompareOp::Gt => ordering == Ordering::Greater,
    })
}

///
/// TESTS
///
