//! Lazily-filtered views over in-memory collections: composable boolean
//! predicates built from a `path__relation` condition mini-language,
//! combined with AND / OR / NOT, and applied one element at a time when a
//! view is iterated. Ergonomic surface is re-exported via the `prelude`.

pub mod error;
pub mod predicate;
pub mod query;
pub mod traits;
pub mod value;
pub mod view;

///
/// Prelude
///
/// Prelude contains only domain vocabulary. Parsing helpers and
/// evaluation internals stay in their modules.
///

pub mod prelude {
    pub use crate::{
        error::Error,
        predicate::{FieldPath, Outcome, Predicate, Relation},
        query::{Cond, Query, cond},
        traits::{FieldValue, Record},
        value::Value,
        view::View,
    };
}
