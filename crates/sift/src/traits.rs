use crate::value::{Float64, Value};

///
/// FieldPresence
///
/// Result of asking a record for a field during predicate evaluation.
/// Distinguishes a missing field from a present field whose value may be
/// `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),
    /// Field is not present on the record.
    Missing,
}

///
/// Record
///
/// Capability query over a record-like item: "does this item expose a
/// member named X". Missing members are reported, never raised, which is
/// what lets path traversal treat absence as a non-match.
///

pub trait Record {
    /// Look up a field by name.
    fn field(&self, name: &str) -> FieldPresence;

    /// The value form of the item itself, used when a condition key has no
    /// attribute hops and the relation applies directly to the candidate.
    fn to_value(&self) -> Value;
}

impl Record for Value {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_field(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

///
/// FieldValue
///
/// Conversion boundary for values used on the *right-hand side* of
/// conditions.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(Float64::from(*self))
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(Float64::new(*self))
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

// impl_field_value_int
macro_rules! impl_field_value_int {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }
            }
        )*
    };
}

impl_field_value_int!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);
