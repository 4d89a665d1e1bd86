use crate::value::Value;
use std::{cmp::Ordering, mem::discriminant};

/// Strict comparator for identical variants.
///
/// Returns `None` for mismatched variants and for `Null` on either side.
/// `Float` uses `total_cmp` so the order stays total in the presence of
/// NaN.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        (Value::Enum(a), Value::Enum(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(a.total_cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Total canonical comparator used by the ordering path.
///
/// Ordering rules:
/// 1. Strict same-variant comparison when available
/// 2. Canonical variant rank otherwise
///
/// `Null` ranks before every present value, so sorts stay total and
/// deterministic even for optional fields.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    if let Some(ordering) = strict_order_cmp(left, right) {
        return ordering;
    }

    left.canonical_rank().cmp(&right.canonical_rank())
}

/// Equality under predicate semantics.
///
/// Returns `None` for mismatched variants; eval treats that as false.
#[must_use]
pub fn compare_eq(left: &Value, right: &Value) -> Option<bool> {
    same_variant(left, right).then(|| left == right)
}

/// Ordering under predicate semantics.
///
/// Returns `None` for mismatched or non-orderable variants; eval treats
/// that as false.
#[must_use]
pub fn compare_order(left: &Value, right: &Value) -> Option<Ordering> {
    if !same_variant(left, right) {
        return None;
    }

    strict_order_cmp(left, right)
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}
