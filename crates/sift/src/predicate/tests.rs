use super::*;
use crate::value::Value;

fn clause(field: &str) -> Predicate {
    Predicate::clause(FieldPath::new([field]), Relation::Eq, "foo")
}

fn person(age: i64, name: &str) -> Value {
    Value::record([("age", Value::Int(age)), ("name", Value::from(name))]).unwrap()
}

// --- relation table ---

#[test]
fn relation_names_round_trip() {
    for relation in [
        Relation::Eq,
        Relation::Lt,
        Relation::Lte,
        Relation::Gte,
        Relation::Gt,
        Relation::Ne,
        Relation::In,
        Relation::StartsWith,
    ] {
        assert_eq!(Relation::from_name(relation.name()), Some(relation));
    }
}

#[test]
fn unknown_relation_name_has_no_entry() {
    assert_eq!(Relation::from_name("contains"), None);
    assert_eq!(Relation::from_name("EQ"), None);
    assert_eq!(Relation::from_name(""), None);
}

// --- expression algebra ---

#[test]
fn and_flattens_nested_ands() {
    let expr = (clause("a") & (clause("b") & clause("c"))) & clause("d");
    match expr {
        Predicate::And(children) => assert_eq!(children.len(), 4),
        _ => panic!("expected And"),
    }
}

#[test]
fn or_flattens_nested_ors() {
    let expr = (clause("x") | (clause("y") | clause("z"))) | clause("w");
    match expr {
        Predicate::Or(children) => assert_eq!(children.len(), 4),
        _ => panic!("expected Or"),
    }
}

#[test]
fn fold_and_identity_and_order() {
    assert_eq!(Predicate::fold_and(vec![]), Predicate::True);
    assert_eq!(Predicate::fold_and(vec![clause("a")]), clause("a"));

    let folded = Predicate::fold_and(vec![clause("a"), clause("b"), clause("c")]);
    assert_eq!(
        folded,
        Predicate::And(vec![clause("a"), clause("b"), clause("c")])
    );
}

#[test]
fn simplify_removes_neutral_elements() {
    let expr = Predicate::And(vec![Predicate::True, clause("a")]);
    assert!(matches!(expr.simplify(), Predicate::Clause(_)));

    let expr = Predicate::And(vec![clause("a"), Predicate::False]);
    assert_eq!(expr.simplify(), Predicate::False);
}

#[test]
fn simplify_applies_de_morgan() {
    let expr = Predicate::Not(Box::new(Predicate::And(vec![clause("a"), clause("b")])));
    match expr.simplify() {
        Predicate::Or(children) => assert_eq!(children.len(), 2),
        _ => panic!("expected Or"),
    }
}

#[test]
fn simplify_eliminates_double_negation() {
    let inner = Predicate::Or(vec![clause("a"), clause("b")]);
    let expr = Predicate::Not(Box::new(Predicate::Not(Box::new(inner.clone()))));
    assert_eq!(expr.simplify(), inner);
}

// --- evaluation ---

#[test]
fn constants_evaluate_as_expected() {
    let record = person(20, "Al");
    assert_eq!(eval(&record, &Predicate::True), Outcome::Match);
    assert_eq!(eval(&record, &Predicate::False), Outcome::NoMatch);
}

#[test]
fn clause_matches_via_field_path() {
    let record = person(20, "Al");
    let gte = Predicate::clause(FieldPath::new(["age"]), Relation::Gte, 18i64);
    let starts = Predicate::clause(FieldPath::new(["name"]), Relation::StartsWith, "A");

    assert_eq!(eval(&record, &gte), Outcome::Match);
    assert_eq!(eval(&record, &starts), Outcome::Match);
    assert_eq!(eval(&person(15, "Cy"), &gte), Outcome::NoMatch);
}

#[test]
fn missing_hop_is_a_non_match() {
    let record = person(20, "Al");
    let pred = Predicate::clause(FieldPath::new(["address", "city"]), Relation::Eq, "Rome");

    assert_eq!(eval(&record, &pred), Outcome::NoMatch);
}

#[test]
fn hop_through_non_record_value_is_a_non_match() {
    // `age` resolves to an Int, which exposes no fields
    let record = person(20, "Al");
    let pred = Predicate::clause(FieldPath::new(["age", "years"]), Relation::Eq, 20i64);

    assert_eq!(eval(&record, &pred), Outcome::NoMatch);
}

#[test]
fn nested_paths_resolve_through_records() {
    let record = Value::record([(
        "address",
        Value::record([("city", Value::from("Rome"))]).unwrap(),
    )])
    .unwrap();
    let pred = Predicate::clause(FieldPath::new(["address", "city"]), Relation::Eq, "Rome");

    assert_eq!(eval(&record, &pred), Outcome::Match);
}

#[test]
fn empty_path_applies_relation_to_candidate() {
    let pred = Predicate::clause(FieldPath::default(), Relation::Gt, 10i64);

    assert_eq!(eval(&Value::Int(42), &pred), Outcome::Match);
    assert_eq!(eval(&Value::Int(3), &pred), Outcome::NoMatch);
    assert_eq!(eval(&Value::Text("42".into()), &pred), Outcome::Invalid);
}

#[test]
fn type_mismatched_ordering_is_invalid() {
    let record = person(20, "Al");
    let pred = Predicate::clause(FieldPath::new(["name"]), Relation::Gt, 5i64);

    assert_eq!(eval(&record, &pred), Outcome::Invalid);
}

#[test]
fn boolean_fields_support_ordering_relations() {
    let record = Value::record([("active", Value::Bool(true))]).unwrap();
    let pred = Predicate::clause(FieldPath::new(["active"]), Relation::Gt, false);

    assert_eq!(eval(&record, &pred), Outcome::Match);

    let pred = Predicate::clause(FieldPath::new(["active"]), Relation::Lte, false);
    assert_eq!(eval(&record, &pred), Outcome::NoMatch);
}

#[test]
fn eq_and_ne_are_never_invalid() {
    let record = person(20, "Al");
    let eq = Predicate::clause(FieldPath::new(["name"]), Relation::Eq, 5i64);
    let ne = Predicate::clause(FieldPath::new(["name"]), Relation::Ne, 5i64);

    assert_eq!(eval(&record, &eq), Outcome::NoMatch);
    assert_eq!(eval(&record, &ne), Outcome::Match);
}

#[test]
fn not_inverts_matches_but_preserves_invalid() {
    let record = person(20, "Al");
    let gte = Predicate::clause(FieldPath::new(["age"]), Relation::Gte, 18i64);
    let bad = Predicate::clause(FieldPath::new(["name"]), Relation::Lt, 5i64);

    assert_eq!(eval(&record, &gte.clone().not()), Outcome::NoMatch);
    assert_eq!(eval(&record, &bad.not()), Outcome::Invalid);
    assert_eq!(
        eval(&person(15, "Cy"), &gte.not()),
        Outcome::Match
    );
}

#[test]
fn and_short_circuits_before_invalid_children() {
    let record = person(20, "Al");
    let miss = Predicate::clause(FieldPath::new(["age"]), Relation::Lt, 18i64);
    let bad = Predicate::clause(FieldPath::new(["name"]), Relation::Gt, 5i64);

    // first child already decides NoMatch; the invalid child is never reached
    let expr = Predicate::And(vec![miss.clone(), bad.clone()]);
    assert_eq!(eval(&record, &expr), Outcome::NoMatch);

    // reached invalid child stops evaluation
    let expr = Predicate::And(vec![bad, miss]);
    assert_eq!(eval(&record, &expr), Outcome::Invalid);
}

#[test]
fn or_short_circuits_before_invalid_children() {
    let record = person(20, "Al");
    let hit = Predicate::clause(FieldPath::new(["age"]), Relation::Gte, 18i64);
    let bad = Predicate::clause(FieldPath::new(["name"]), Relation::Gt, 5i64);

    let expr = Predicate::Or(vec![hit.clone(), bad.clone()]);
    assert_eq!(eval(&record, &expr), Outcome::Match);

    let expr = Predicate::Or(vec![bad, hit]);
    assert_eq!(eval(&record, &expr), Outcome::Invalid);
}

// --- serialization ---

#[test]
fn predicate_serializes_with_lowercase_relation_names() {
    let pred = Predicate::clause(FieldPath::new(["name"]), Relation::StartsWith, "A");
    let json = serde_json::to_value(&pred).unwrap();

    assert_eq!(json["Clause"]["relation"], "startswith");
    assert_eq!(json["Clause"]["path"][0], "name");
}
