use crate::{traits::FieldValue, value::Value};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

/// Delimiter between segments of a condition key.
pub const PATH_DELIMITER: &str = "__";

///
/// Relation
///
/// Closed table of binary relation kinds addressable from condition keys.
/// Lookup is by exact name; the set is fixed and dispatched by `match`
/// during evaluation.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Eq,
    Lt,
    Lte,
    Gte,
    Gt,
    Ne,
    In,
    StartsWith,
}

impl Relation {
    /// Resolve a relation by its key-syntax name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(Self::Eq),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "gte" => Some(Self::Gte),
            "gt" => Some(Self::Gt),
            "ne" => Some(Self::Ne),
            "in" => Some(Self::In),
            "startswith" => Some(Self::StartsWith),
            _ => None,
        }
    }

    /// The key-syntax name of this relation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gte => "gte",
            Self::Gt => "gt",
            Self::Ne => "ne",
            Self::In => "in",
            Self::StartsWith => "startswith",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// FieldPath
///
/// Chain of attribute hops leading from a candidate record to the value a
/// relation is applied to. May be empty, in which case the relation
/// applies to the candidate itself.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    #[must_use]
    pub fn new<I, S>(hops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(hops.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn hops(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(PATH_DELIMITER))
    }
}

///
/// Clause
///
/// A single comparison: walk `path` on the candidate, then apply
/// `relation` against `value`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Clause {
    pub path: FieldPath,
    pub relation: Relation,
    pub value: Value,
}

impl Clause {
    #[must_use]
    pub fn new(path: FieldPath, relation: Relation, value: impl FieldValue) -> Self {
        Self {
            path,
            relation,
            value: value.to_value(),
        }
    }
}

///
/// Predicate
///
/// Immutable boolean expression tree over one record.
///
/// Expressions can be:
/// - `True` or `False` constants
/// - a single `Clause`
/// - composites: `And`, `Or`, and negation `Not`.
///
/// Composition always wraps existing nodes in a new one; nothing is
/// mutated in place, so a derived view can never disturb its parent.
/// Evaluation lives in `eval`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Predicate {
    #[default]
    True,
    False,
    Clause(Clause),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl Predicate {
    /// Create a single clause: `path relation value`.
    pub fn clause(path: FieldPath, relation: Relation, value: impl FieldValue) -> Self {
        Self::Clause(Clause::new(path, relation, value))
    }

    /// Combine two predicates into an `And`.
    ///
    /// Flattens nested `And`s to avoid deep nesting (`(a AND b) AND c`
    /// becomes `AND[a, b, c]`), preserving child order.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::And(mut a), Self::And(mut b)) => {
                a.append(&mut b);
                Self::And(a)
            }
            (Self::And(mut a), b) => {
                a.push(b);
                Self::And(a)
            }
            (a, Self::And(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::And(list)
            }
            (a, b) => Self::And(vec![a, b]),
        }
    }

    /// Combine two predicates into an `Or`, flattening nested `Or`s
    /// similarly to `and`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Or(mut a), Self::Or(mut b)) => {
                a.append(&mut b);
                Self::Or(a)
            }
            (Self::Or(mut a), b) => {
                a.push(b);
                Self::Or(a)
            }
            (a, Self::Or(mut b)) => {
                let mut list = vec![a];
                list.append(&mut b);
                Self::Or(list)
            }
            (a, b) => Self::Or(vec![a, b]),
        }
    }

    /// Negate this predicate.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Fold a list of predicates under AND, in list order.
    ///
    /// A single predicate is returned unchanged; an empty list folds to
    /// the identity `True`.
    #[must_use]
    pub fn fold_and(preds: Vec<Self>) -> Self {
        let mut iter = preds.into_iter();
        let Some(first) = iter.next() else {
            return Self::True;
        };

        iter.fold(first, Self::and)
    }

    /// Simplify the expression recursively:
    /// - eliminate double negation `NOT NOT x` -> `x`
    /// - apply De Morgan's laws under `NOT`
    /// - flatten nested `And` / `Or`
    /// - remove neutral elements (`AND [True, x]` -> `x`, `OR [False, x]` -> `x`)
    /// - short-circuit on constants (`AND` with `False`, `OR` with `True`)
    ///
    /// View combinators run this on every merged predicate, so stored
    /// predicates never accumulate constant nodes.
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Self::Not(inner) => Self::simplify_not(*inner),
            Self::And(children) => Self::simplify_group(children, true),
            Self::Or(children) => Self::simplify_group(children, false),
            // clauses and constants are already simplest forms
            other => other,
        }
    }

    fn simplify_not(inner: Self) -> Self {
        match inner {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Not(inner) => (*inner).simplify(),
            // De Morgan's: negation distributes over the dual group
            Self::And(children) => {
                Self::simplify_group(children.into_iter().map(Self::not).collect(), false)
            }
            Self::Or(children) => {
                Self::simplify_group(children.into_iter().map(Self::not).collect(), true)
            }
            clause => Self::Not(Box::new(clause)),
        }
    }

    // One reducer for both group kinds: `conjunctive` selects `And`
    // semantics, `Or` is its dual with neutral and absorbing swapped.
    fn simplify_group(children: Vec<Self>, conjunctive: bool) -> Self {
        let mut flat = Vec::with_capacity(children.len());

        for child in children {
            match (child.simplify(), conjunctive) {
                // an absorbing constant decides the whole group
                (Self::False, true) => return Self::False,
                (Self::True, false) => return Self::True,
                // neutral constants drop out
                (Self::True, true) | (Self::False, false) => {}
                (Self::And(nested), true) | (Self::Or(nested), false) => flat.extend(nested),
                (child, _) => flat.push(child),
            }
        }

        match flat.len() {
            0 => {
                if conjunctive { Self::True } else { Self::False }
            }
            1 => flat.into_iter().next().unwrap(),
            _ => {
                if conjunctive {
                    Self::And(flat)
                } else {
                    Self::Or(flat)
                }
            }
        }
    }
}

///
/// Bit Operations
/// allow `&`, `|` and `!` on predicates
///

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}
