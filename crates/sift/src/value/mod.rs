mod compare;


pub use compare::{member_of, order_cmp, starts_with, value_eq};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// Float64
///
/// Float wrapper with IEEE-754 total ordering so float-bearing values can
/// participate in `Eq` containers deterministically. Relation tests go
/// through the numeric comparison path instead, which keeps native NaN
/// semantics.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Float64 {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl std::fmt::Display for Float64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// RecordValueError
///
/// Invariant violations for `Value::Record` construction.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RecordValueError {
    #[error("record field name at index {index} is empty")]
    EmptyFieldName { index: usize },

    #[error("record contains duplicate field '{name}'")]
    DuplicateField { name: String },
}

///
/// Value
///
/// Closed, self-describing runtime value model. Items without a schema are
/// queried through this enum; comparison semantics live in `compare`.
///
/// Records are canonical: entries sorted by field name, names unique and
/// non-empty. Construct them through [`Value::record`].
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "RawValue")]
pub enum Value {
    Bool(bool),
    Float(Float64),
    Int(i64),
    /// Ordered list of values; order is preserved and significant.
    List(Vec<Self>),
    #[default]
    Null,
    /// Canonical record representation (sorted, unique field names).
    Record(Vec<(String, Self)>),
    Text(String),
    Uint(u64),
}

impl Value {
    /// Build a canonical record value.
    ///
    /// Entries are sorted by field name; empty or duplicate names fail
    /// loudly since they can never be addressed by a condition key.
    pub fn record<I, K, V>(entries: I) -> Result<Self, RecordValueError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        let mut fields: Vec<(String, Self)> = entries
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        for (index, (name, _)) in fields.iter().enumerate() {
            if name.is_empty() {
                return Err(RecordValueError::EmptyFieldName { index });
            }
        }

        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for pair in fields.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(RecordValueError::DuplicateField {
                    name: pair[0].0.clone(),
                });
            }
        }

        Ok(Self::Record(fields))
    }

    /// Field lookup on a canonical record. Non-record values expose no
    /// fields.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields
                .binary_search_by(|(field, _)| field.as_str().cmp(name))
                .ok()
                .map(|index| &fields[index].1),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_) | Self::Float(_))
    }

    /// Widened representation for numeric-family comparisons.
    pub(crate) const fn numeric_repr(&self) -> Option<NumericRepr> {
        match self {
            Self::Int(v) => Some(NumericRepr::Int(*v as i128)),
            Self::Uint(v) => Some(NumericRepr::Int(*v as i128)),
            Self::Float(v) => Some(NumericRepr::Float(v.get())),
            _ => None,
        }
    }
}

///
/// RawValue
///
/// Wire-shape mirror of `Value` used only during deserialization. Incoming
/// records are rebuilt through [`Value::record`] so the canonical invariant
/// (sorted, unique, non-empty field names) holds for every value that enters
/// the engine, whatever order the payload listed the fields in.
///

#[derive(Deserialize)]
enum RawValue {
    Bool(bool),
    Float(Float64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Record(Vec<(String, Self)>),
    Text(String),
    Uint(u64),
}

impl TryFrom<RawValue> for Value {
    type Error = RecordValueError;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawValue::Bool(v) => Self::Bool(v),
            RawValue::Float(v) => Self::Float(v),
            RawValue::Int(v) => Self::Int(v),
            RawValue::List(items) => Self::List(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            RawValue::Null => Self::Null,
            RawValue::Record(entries) => {
                let entries = entries
                    .into_iter()
                    .map(|(name, value)| Ok((name, Self::try_from(value)?)))
                    .collect::<Result<Vec<_>, Self::Error>>()?;

                Self::record(entries)?
            }
            RawValue::Text(v) => Self::Text(v),
            RawValue::Uint(v) => Self::Uint(v),
        })
    }
}

///
/// NumericRepr
///
/// All integral variants widen into `i128`; floats stay floats and
/// cross-repr comparison happens in `compare`.
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum NumericRepr {
    Int(i128),
    Float(f64),
}

///
/// Conversions
///

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(Float64::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}
