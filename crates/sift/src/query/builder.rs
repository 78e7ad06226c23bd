use crate::{
    predicate::Predicate,
    query::key::{KeyError, parse_key},
    traits::FieldValue,
    value::Value,
    view::View,
};

///
/// Cond
///
/// One keyword condition: a raw `path__relation` key plus its reference
/// value. The key is kept unparsed until fold time so a malformed key
/// surfaces from the combinator call that received it.
///

#[derive(Clone, Debug)]
pub struct Cond {
    key: String,
    value: Value,
}

impl Cond {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl FieldValue) -> Self {
        Self {
            key: key.into(),
            value: value.to_value(),
        }
    }

    pub(crate) fn into_clause(self) -> Result<Predicate, KeyError> {
        let (path, relation) = parse_key(&self.key)?;

        Ok(Predicate::clause(path, relation, self.value))
    }
}

/// Shorthand for [`Cond::new`].
#[must_use]
pub fn cond(key: impl Into<String>, value: impl FieldValue) -> Cond {
    Cond::new(key, value)
}

///
/// Query
///
/// Ordered accumulation of keyword conditions and sibling-view
/// predicates. Purely declarative: nothing is parsed, validated, or
/// evaluated until a view combinator folds it.
///

#[derive(Clone, Debug, Default)]
pub struct Query {
    parts: Vec<Part>,
}

#[derive(Clone, Debug)]
enum Part {
    Cond(Cond),
    Predicate(Predicate),
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword condition.
    #[must_use]
    pub fn cond(mut self, key: impl Into<String>, value: impl FieldValue) -> Self {
        self.parts.push(Part::Cond(Cond::new(key, value)));
        self
    }

    /// Reuse another view's predicate as one condition of this query.
    ///
    /// Only the predicate is taken; the other view's source plays no part.
    #[must_use]
    pub fn view<R>(mut self, view: &View<R>) -> Self {
        self.parts.push(Part::Predicate(view.predicate().clone()));
        self
    }

    /// Fold all parts into one predicate under AND, in insertion order.
    ///
    /// An empty query folds to the identity `True`.
    pub(crate) fn fold(self) -> Result<Predicate, KeyError> {
        let mut preds = Vec::with_capacity(self.parts.len());
        for part in self.parts {
            preds.push(match part {
                Part::Cond(cond) => cond.into_clause()?,
                Part::Predicate(predicate) => predicate,
            });
        }

        Ok(Predicate::fold_and(preds))
    }
}

///
/// IntoQuery
///
/// Argument conversion for view combinators: a single condition, a batch
/// of conditions, a sibling view, or a prepared `Query`.
///

pub trait IntoQuery {
    fn into_query(self) -> Query;
}

impl IntoQuery for Query {
    fn into_query(self) -> Query {
        self
    }
}

impl IntoQuery for Cond {
    fn into_query(self) -> Query {
        Query {
            parts: vec![Part::Cond(self)],
        }
    }
}

impl IntoQuery for Vec<Cond> {
    fn into_query(self) -> Query {
        Query {
            parts: self.into_iter().map(Part::Cond).collect(),
        }
    }
}

impl<const N: usize> IntoQuery for [Cond; N] {
    fn into_query(self) -> Query {
        Query {
            parts: self.into_iter().map(Part::Cond).collect(),
        }
    }
}

impl<R> IntoQuery for &View<R> {
    fn into_query(self) -> Query {
        Query {
            parts: vec![Part::Predicate(self.predicate().clone())],
        }
    }
}
