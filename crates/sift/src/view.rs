use crate::{
    error::Error,
    predicate::{Outcome, Predicate, eval},
    query::IntoQuery,
    traits::Record,
};
use std::sync::Arc;

///
/// View
///
/// The queryable wrapper: a shared, read-only source plus the current
/// predicate. Combinators parse and fold their arguments, merge the fold
/// with the current predicate, and return a *new* view over the same
/// source allocation; a view is never mutated after construction.
///
/// Building a view touches no elements; evaluation happens only when the
/// view is iterated, one element at a time, in source order.
///

#[derive(Clone, Debug)]
pub struct View<R> {
    source: Arc<[R]>,
    predicate: Predicate,
}

impl<R> View<R> {
    /// Wrap a source with the always-true predicate.
    pub fn new(source: impl Into<Arc<[R]>>) -> Self {
        Self {
            source: source.into(),
            predicate: Predicate::True,
        }
    }

    /// The view's current predicate.
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Number of elements in the underlying source, not the match count.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Narrow the view: `current AND folded`.
    pub fn filter(&self, query: impl IntoQuery) -> Result<Self, Error> {
        let folded = query.into_query().fold()?;

        Ok(self.derive(self.predicate.clone().and(folded)))
    }

    /// Widen the view: `current OR folded`.
    pub fn or_(&self, query: impl IntoQuery) -> Result<Self, Error> {
        let folded = query.into_query().fold()?;

        Ok(self.derive(self.predicate.clone().or(folded)))
    }

    /// Exclude elements matching all of the query's conditions:
    /// `current AND NOT folded`. The existing predicate is not inverted.
    pub fn not_(&self, query: impl IntoQuery) -> Result<Self, Error> {
        let folded = query.into_query().fold()?;

        Ok(self.derive(self.predicate.clone().and(folded.not())))
    }

    // Merged predicates are simplified before being stored, so chained
    // combinators never stack constant nodes onto the tree.
    fn derive(&self, predicate: Predicate) -> Self {
        Self {
            source: Arc::clone(&self.source),
            predicate: predicate.simplify(),
        }
    }
}

impl<R: Record> View<R> {
    /// Lazily iterate the matching elements in source order.
    ///
    /// The pass is stateless and restartable: iterating again yields
    /// identical results for a deterministic source. Elements whose
    /// evaluation is invalid are excluded, not fatal.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.outcomes(),
        }
    }

    /// Per-element outcomes in source order, for callers that need to
    /// distinguish invalid comparisons from plain non-matches.
    #[must_use]
    pub fn outcomes(&self) -> Outcomes<'_, R> {
        Outcomes {
            source: self.source.iter(),
            predicate: &self.predicate,
        }
    }
}

impl<R> From<Vec<R>> for View<R> {
    fn from(source: Vec<R>) -> Self {
        Self::new(source)
    }
}

impl<'a, R: Record> IntoIterator for &'a View<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// Iter
///
/// Lazy pass over the source yielding only matching elements.
///

pub struct Iter<'a, R> {
    inner: Outcomes<'a, R>,
}

impl<'a, R: Record> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (record, outcome) = self.inner.next()?;
            match outcome {
                Outcome::Match => return Some(record),
                Outcome::NoMatch => {}
                Outcome::Invalid => {
                    log::trace!("element excluded: relation undefined for its value type");
                }
            }
        }
    }
}

///
/// Outcomes
///
/// Diagnostic iterator pairing every source element with its evaluation
/// outcome.
///

pub struct Outcomes<'a, R> {
    source: std::slice::Iter<'a, R>,
    predicate: &'a Predicate,
}

impl<'a, R: Record> Iterator for Outcomes<'a, R> {
    type Item = (&'a R, Outcome);

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.source.next()?;

        Some((record, eval(record, self.predicate)))
    }
}

///
/// TESTS
///
