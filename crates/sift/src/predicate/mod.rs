mod ast;
mod eval;

#[cfg(test)]
mod tests;

pub use ast::{Clause, FieldPath, PATH_DELIMITER, Predicate, Relation};
pub use eval::{Outcome, eval};
