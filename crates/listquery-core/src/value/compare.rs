use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used by ordering and reference evaluation.
///
/// Ordering rules:
/// 1. Variant rank (number, date, text)
/// 2. Variant-specific comparison for same-ranked values
///
/// Numbers compare with `f64::total_cmp`, so NaN sorts after every finite value.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.tag().rank().cmp(&right.tag().rank());
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Strict comparator for identical variants.
///
/// Returns `None` for mismatched variants or unordered numbers (NaN).
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
