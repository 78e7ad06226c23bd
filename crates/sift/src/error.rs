use crate::query::KeyError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for query construction. Evaluation itself never
/// errors; per-element trouble is reported through `Outcome` at the view
/// boundary instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),
}
