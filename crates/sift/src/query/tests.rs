use super::*;
use crate::{
    predicate::{FieldPath, Predicate, Relation},
    value::Value,
    view::View,
};

fn clause(key_field: &str, relation: Relation, value: i64) -> Predicate {
    Predicate::clause(FieldPath::new([key_field]), relation, value)
}

#[test]
fn single_cond_folds_to_its_clause() {
    let folded = cond("age__gte", 18i64).into_query().fold().unwrap();
    assert_eq!(folded, clause("age", Relation::Gte, 18));
}

#[test]
fn multiple_conds_fold_under_and_in_argument_order() {
    let folded = Query::new()
        .cond("age__gte", 18i64)
        .cond("age__lt", 65i64)
        .fold()
        .unwrap();

    assert_eq!(
        folded,
        Predicate::And(vec![
            clause("age", Relation::Gte, 18),
            clause("age", Relation::Lt, 65),
        ])
    );
}

#[test]
fn empty_query_folds_to_identity() {
    assert_eq!(Query::new().fold().unwrap(), Predicate::True);
    assert_eq!(Vec::<Cond>::new().into_query().fold().unwrap(), Predicate::True);
}

#[test]
fn sibling_view_contributes_its_predicate() {
    let source: Vec<Value> = vec![];
    let sibling = View::new(source).filter(cond("age__gte", 18i64)).unwrap();

    // the sibling stores its simplified predicate, so folding it into
    // another query contributes exactly one clause, no constant nodes
    assert_eq!(*sibling.predicate(), clause("age", Relation::Gte, 18));

    let folded = Query::new()
        .cond("name__startswith", "A")
        .view(&sibling)
        .fold()
        .unwrap();

    let Predicate::And(children) = folded else {
        panic!("expected And");
    };

    assert_eq!(children.len(), 2);
    assert_eq!(
        children[0],
        Predicate::clause(FieldPath::new(["name"]), Relation::StartsWith, "A")
    );
    assert_eq!(children[1], *sibling.predicate());
}

#[test]
fn malformed_key_fails_the_fold() {
    let err = cond("age__between", 18i64).into_query().fold().unwrap_err();
    assert_eq!(
        err,
        KeyError::UnknownRelation {
            name: "between".to_string()
        }
    );
}

#[test]
fn cond_values_convert_through_field_value() {
    let folded = Query::new()
        .cond("tags__in", vec!["a", "b"])
        .fold()
        .unwrap();

    assert_eq!(
        folded,
        Predicate::clause(
            FieldPath::new(["tags"]),
            Relation::In,
            Value::List(vec![Value::from("a"), Value::from("b")]),
        )
    );
}
