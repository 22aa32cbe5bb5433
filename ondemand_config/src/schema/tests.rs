//! Unit tests for schema declarations and default materialisation.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use rstest::rstest;
use serde_json::{Value, json};

use super::{DefaultValue, FieldKind, FieldSpec, Schema};

static INNER_FIELDS: &[FieldSpec] = &[FieldSpec::plain("port")];
static INNER: Schema = Schema::new("Inner", "inner.yml", INNER_FIELDS);

static OUTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::plain("name"),
    FieldSpec::with_default("enabled", DefaultValue::Bool(true)),
    FieldSpec::nested("inner", &INNER),
];
static OUTER: Schema = Schema::new("Outer", "outer.yml", OUTER_FIELDS);
static OUTER_TWIN: Schema = Schema::new("Outer", "outer.yml", OUTER_FIELDS);

#[rstest]
#[case(DefaultValue::Null, Value::Null)]
#[case(DefaultValue::Bool(false), json!(false))]
#[case(DefaultValue::Integer(300), json!(300))]
#[case(DefaultValue::Str("/opt/ood/VERSION"), json!("/opt/ood/VERSION"))]
#[case(DefaultValue::EmptyList, json!([]))]
#[case(DefaultValue::EmptyMap, json!({}))]
fn defaults_materialise(#[case] default: DefaultValue, #[case] expected: Value) {
    assert_eq!(default.to_value(), expected);
}

#[test]
fn defaults_are_fresh_per_call() {
    let mut first = DefaultValue::EmptyList.to_value();
    if let Value::Array(items) = &mut first {
        items.push(json!("PATH"));
    }
    assert_eq!(DefaultValue::EmptyList.to_value(), json!([]));
}

#[test]
fn lookups_follow_declaration_order() {
    assert_eq!(OUTER.len(), 3);
    assert_eq!(OUTER.position("name"), Some(0));
    assert_eq!(OUTER.position("inner"), Some(2));
    assert_eq!(OUTER.position("missing"), None);
    let names: Vec<_> = OUTER.field_names().collect();
    assert_eq!(names, ["name", "enabled", "inner"]);
}

#[test]
fn nested_fields_expose_their_schema() {
    let inner = OUTER.field("inner").expect("inner field");
    assert!(matches!(inner.kind(), FieldKind::Nested(_)));
    assert!(inner.nested_schema().is_some_and(|s| s.same_as(&INNER)));
    assert!(OUTER.field("name").and_then(FieldSpec::nested_schema).is_none());
}

#[test]
fn identity_ignores_structural_equality() {
    assert!(OUTER.same_as(&OUTER));
    assert!(!OUTER.same_as(&OUTER_TWIN));
    assert!(!OUTER.same_as(&INNER));
}
