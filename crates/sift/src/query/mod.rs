mod builder;
mod key;

#[cfg(test)]
mod tests;

pub use builder::{Cond, IntoQuery, Query, cond};
pub use key::{KeyError, parse_key};
