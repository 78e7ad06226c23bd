use crate::predicate::{FieldPath, PATH_DELIMITER, Relation};
use thiserror::Error as ThisError;

///
/// KeyError
///
/// A malformed condition key is a programming error in the query, not a
/// data error. It surfaces from the combinator call that received the key
/// and is never swallowed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyError {
    #[error("empty condition key")]
    EmptyKey,

    #[error(
        "unknown relation '{name}'; the last '__'-separated token of a condition key must name a relation"
    )]
    UnknownRelation { name: String },
}

/// Parse a condition key of the form `segment[__segment...]__relation`.
///
/// The last token names the relation; earlier non-empty tokens become
/// attribute hops. Empty segments are skipped, so a bare relation name
/// resolves against the candidate itself.
pub fn parse_key(key: &str) -> Result<(FieldPath, Relation), KeyError> {
    if key.is_empty() {
        return Err(KeyError::EmptyKey);
    }

    let mut tokens: Vec<&str> = key.split(PATH_DELIMITER).collect();

    // split yields at least one token for a non-empty key
    let relation_name = tokens.pop().unwrap_or_default();
    let relation = Relation::from_name(relation_name).ok_or_else(|| KeyError::UnknownRelation {
        name: relation_name.to_string(),
    })?;

    let path = FieldPath::new(tokens.into_iter().filter(|token| !token.is_empty()));

    Ok((path, relation))
}
