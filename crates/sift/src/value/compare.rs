use crate::value::{NumericRepr, Value};
use std::cmp::Ordering;

///
/// Comparison semantics for runtime values.
///
/// Helpers that can be undefined for a variant pair return `Option`;
/// `None` means the comparison does not exist for those runtime types and
/// is surfaced as an invalid evaluation at the predicate layer. Equality
/// is total: mismatched variants are simply unequal.
///

/// Native equality across runtime values.
///
/// Identical variants compare structurally; the numeric family widens
/// before comparing. Any other cross-variant pair is unequal.
#[must_use]
pub fn value_eq(left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (left.numeric_repr(), right.numeric_repr()) {
        return numeric_eq(a, b);
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| value_eq(x, y))
        }
        (Value::Record(a), Value::Record(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && value_eq(va, vb))
        }
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// Strict comparator for orderable values.
///
/// Ordering exists within the numeric family (widened), between booleans
/// (`false < true`), between texts, and between lists (lexicographic).
/// Returns `None` for every other pair.
#[must_use]
pub fn order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (left.numeric_repr(), right.numeric_repr()) {
        return numeric_cmp(a, b);
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::List(a), Value::List(b)) => list_cmp(a, b),
        _ => None,
    }
}

/// Membership test: candidate is a member of reference.
///
/// Defined when the reference is a list (element equality) or when both
/// sides are text (substring containment).
#[must_use]
pub fn member_of(candidate: &Value, reference: &Value) -> Option<bool> {
    match reference {
        Value::List(items) => Some(items.iter().any(|item| value_eq(candidate, item))),
        Value::Text(haystack) => match candidate {
            Value::Text(needle) => Some(haystack.contains(needle.as_str())),
            _ => None,
        },
        _ => None,
    }
}

/// Prefix test: candidate starts with reference.
///
/// Defined for text-on-text and list-on-list.
#[must_use]
pub fn starts_with(candidate: &Value, reference: &Value) -> Option<bool> {
    match (candidate, reference) {
        (Value::Text(c), Value::Text(r)) => Some(c.starts_with(r.as_str())),
        (Value::List(c), Value::List(r)) => {
            Some(c.len() >= r.len() && c.iter().zip(r).all(|(x, y)| value_eq(x, y)))
        }
        _ => None,
    }
}

// Lexicographic list comparison; undefined as soon as an element pair is
// itself unorderable.
fn list_cmp(left: &[Value], right: &[Value]) -> Option<Ordering> {
    for (l, r) in left.iter().zip(right.iter()) {
        match order_cmp(l, r)? {
            Ordering::Equal => {}
            other => return Some(other),
        }
    }

    Some(left.len().cmp(&right.len()))
}

fn numeric_eq(left: NumericRepr, right: NumericRepr) -> bool {
    match (left, right) {
        (NumericRepr::Int(a), NumericRepr::Int(b)) => a == b,
        (NumericRepr::Float(a), NumericRepr::Float(b)) => a == b,
        (NumericRepr::Int(a), NumericRepr::Float(b))
        | (NumericRepr::Float(b), NumericRepr::Int(a)) => {
            int_float_cmp(a, b) == Some(Ordering::Equal)
        }
    }
}

fn numeric_cmp(left: NumericRepr, right: NumericRepr) -> Option<Ordering> {
    match (left, right) {
        (NumericRepr::Int(a), NumericRepr::Int(b)) => Some(a.cmp(&b)),
        (NumericRepr::Float(a), NumericRepr::Float(b)) => a.partial_cmp(&b),
        (NumericRepr::Int(a), NumericRepr::Float(b)) => int_float_cmp(a, b),
        (NumericRepr::Float(a), NumericRepr::Int(b)) => int_float_cmp(b, a).map(Ordering::reverse),
    }
}

// i128 to f64 is lossy above 2^53; comparisons in that range follow the
// rounded float. NaN has no ordering and yields None.
#[allow(clippy::cast_precision_loss)]
fn int_float_cmp(int: i128, float: f64) -> Option<Ordering> {
    (int as f64).partial_cmp(&float)
}
