//! Unit tests for the merge operators.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::{merge, merge_in_place, merge_reflected};
use crate::error::ErrorKind;
use crate::record::Record;
use crate::schema::{DefaultValue, FieldSpec, Schema};

static TLS_FIELDS: &[FieldSpec] = &[
    FieldSpec::plain("cert"),
    FieldSpec::plain("key"),
];
static TLS: Schema = Schema::new("TlsConfig", "tls.yml", TLS_FIELDS);

static SITE_FIELDS: &[FieldSpec] = &[
    FieldSpec::plain("servername"),
    FieldSpec::with_default("port", DefaultValue::Integer(80)),
    FieldSpec::with_default("aliases", DefaultValue::EmptyList),
    FieldSpec::nested("tls", &TLS),
];
static SITE: Schema = Schema::new("SiteConfig", "site.yml", SITE_FIELDS);
static SITE_TWIN: Schema = Schema::new("SiteConfig", "site.yml", SITE_FIELDS);

fn site(schema: &'static Schema, tree: Value) -> Record {
    Record::from_value(schema, tree).expect("valid site mapping")
}

#[fixture]
fn base() -> Record {
    site(
        &SITE,
        json!({"servername": "ood.example.org", "port": 8080, "tls": {"cert": "/a.crt", "key": "/a.key"}}),
    )
}

#[rstest]
fn defaults_on_the_right_change_nothing(base: Record) {
    let merged = merge(&base, &Record::new(&SITE)).expect("same schema");
    assert_eq!(merged, base);
}

#[rstest]
fn non_default_right_fields_win(base: Record) {
    let patch = site(&SITE, json!({"port": 443, "aliases": ["www.example.org"]}));
    let merged = merge(&base, &patch).expect("same schema");
    assert_eq!(merged.value("port").ok(), Some(&json!(443)));
    assert_eq!(merged.value("aliases").ok(), Some(&json!(["www.example.org"])));
    assert_eq!(merged.value("servername").ok(), Some(&json!("ood.example.org")));
}

#[rstest]
fn nested_records_are_replaced_wholesale(base: Record) {
    let patch = site(&SITE, json!({"tls": {"cert": "/b.crt"}}));
    let merged = merge(&base, &patch).expect("same schema");
    let tls = merged.record("tls").expect("nested field");
    assert_eq!(tls.value("cert").ok(), Some(&json!("/b.crt")));
    assert_eq!(tls.value("key").ok(), Some(&Value::Null));
}

#[rstest]
fn explicit_default_on_the_right_is_not_an_override(base: Record) {
    let patch = site(&SITE, json!({"port": 80}));
    let merged = merge(&base, &patch).expect("same schema");
    assert_eq!(merged.value("port").ok(), Some(&json!(8080)));
}

#[rstest]
fn operands_are_left_untouched(base: Record) {
    let patch = site(&SITE, json!({"servername": "other"}));
    let before = (base.clone(), patch.clone());
    let _merged = merge(&base, &patch).expect("same schema");
    assert_eq!((base, patch), before);
}

#[rstest]
fn reflected_form_treats_receiver_as_override(base: Record) {
    let patch = site(&SITE, json!({"port": 443}));
    assert_eq!(
        merge_reflected(&patch, &base).expect("same schema"),
        merge(&base, &patch).expect("same schema")
    );
}

#[rstest]
fn in_place_form_matches_the_pure_form(mut base: Record) {
    let patch = site(&SITE, json!({"aliases": ["a"], "port": 443}));
    let expected = merge(&base, &patch).expect("same schema");
    merge_in_place(&mut base, &patch).expect("same schema");
    assert_eq!(base, expected);
}

#[rstest]
fn structurally_identical_schemas_do_not_merge(mut base: Record) {
    let twin = site(&SITE_TWIN, json!({"port": 443}));
    let before = base.clone();
    for outcome in [
        merge(&base, &twin).map(drop),
        merge_reflected(&twin, &base).map(drop),
        merge_in_place(&mut base, &twin),
    ] {
        assert_eq!(outcome.map_err(|e| e.kind()), Err(ErrorKind::SchemaMismatch));
    }
    assert_eq!(base, before);
}
