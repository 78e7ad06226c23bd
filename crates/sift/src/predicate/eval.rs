use crate::{
    predicate::{Clause, Predicate, Relation},
    traits::{FieldPresence, Record},
    value::{Value, member_of, order_cmp, starts_with, value_eq},
};
use std::cmp::Ordering;

///
/// Outcome
///
/// Per-element evaluation result. `Invalid` marks a relation applied to a
/// value whose runtime type does not support it; the view boundary treats
/// it as a non-match but keeps it distinguishable for diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Match,
    NoMatch,
    Invalid,
}

impl Outcome {
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }

    const fn from_bool(matched: bool) -> Self {
        if matched { Self::Match } else { Self::NoMatch }
    }

    const fn negate(self) -> Self {
        match self {
            Self::Match => Self::NoMatch,
            Self::NoMatch => Self::Match,
            Self::Invalid => Self::Invalid,
        }
    }
}

///
/// Evaluate a predicate against a single record.
///
/// Pure runtime evaluation: no schema access, no planning. `And` and `Or`
/// short-circuit in child order, so a child that already decides the
/// result masks later children, invalid ones included. An `Invalid` child
/// that is reached stops evaluation, like the failure it stands for.
///
#[must_use]
pub fn eval<R: Record + ?Sized>(record: &R, predicate: &Predicate) -> Outcome {
    match predicate {
        Predicate::True => Outcome::Match,
        Predicate::False => Outcome::NoMatch,

        Predicate::And(children) => {
            for child in children {
                match eval(record, child) {
                    Outcome::Match => {}
                    outcome => return outcome,
                }
            }

            Outcome::Match
        }

        Predicate::Or(children) => {
            for child in children {
                match eval(record, child) {
                    Outcome::NoMatch => {}
                    outcome => return outcome,
                }
            }

            Outcome::NoMatch
        }

        Predicate::Not(inner) => eval(record, inner).negate(),

        Predicate::Clause(clause) => eval_clause(record, clause),
    }
}

///
/// Walk the clause path and apply its relation to the resolved value.
///
/// A hop that does not exist, or that lands on a value without fields, is
/// a non-match rather than an error. With no hops the relation applies to
/// the candidate itself.
///
fn eval_clause<R: Record + ?Sized>(record: &R, clause: &Clause) -> Outcome {
    let mut hops = clause.path.hops().iter();

    let Some(first) = hops.next() else {
        return apply_relation(clause.relation, &record.to_value(), &clause.value);
    };

    let FieldPresence::Present(mut cur) = record.field(first) else {
        return Outcome::NoMatch;
    };

    for hop in hops {
        match cur.get_field(hop) {
            Some(next) => cur = next.clone(),
            None => return Outcome::NoMatch,
        }
    }

    apply_relation(clause.relation, &cur, &clause.value)
}

///
/// Apply a relation test to a resolved candidate value.
///
/// Comparison helpers return `None` when the comparison is undefined for
/// the candidate's runtime type; that surfaces as `Invalid`.
///
fn apply_relation(relation: Relation, candidate: &Value, reference: &Value) -> Outcome {
    let matched = match relation {
        Relation::Eq => Some(value_eq(candidate, reference)),
        Relation::Ne => Some(!value_eq(candidate, reference)),

        Relation::Lt => order_cmp(candidate, reference).map(Ordering::is_lt),
        Relation::Lte => order_cmp(candidate, reference).map(Ordering::is_le),
        Relation::Gt => order_cmp(candidate, reference).map(Ordering::is_gt),
        Relation::Gte => order_cmp(candidate, reference).map(Ordering::is_ge),

        Relation::In => member_of(candidate, reference),
        Relation::StartsWith => starts_with(candidate, reference),
    };

    match matched {
        Some(matched) => Outcome::from_bool(matched),
        None => Outcome::Invalid,
    }
}
