//! Behavioural tests for combining configuration records.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use anyhow::{Result, ensure};
use ondemand_config::{
    ErrorKind, Record, merge, merge_in_place, merge_reflected, nginx_stage, ood_portal,
};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::fixtures::OOD_PORTAL_YML;

#[fixture]
fn site() -> Record {
    ood_portal::loads(OOD_PORTAL_YML).expect("sample portal document parses")
}

fn portal_with(fields: &[(&str, serde_json::Value)]) -> Result<Record> {
    let mut record = ood_portal::new();
    for (name, value) in fields {
        record.set(name, value.clone())?;
    }
    Ok(record)
}

#[rstest]
fn merging_defaults_is_the_identity(site: Record) -> Result<()> {
    let defaults = ood_portal::new();
    ensure!(merge(&site, &defaults)? == site, "defaults on the right change nothing");
    ensure!(merge(&defaults, &site)? == site, "defaults on the left are fully overridden");
    Ok(())
}

#[rstest]
fn non_default_right_fields_win(site: Record) -> Result<()> {
    let patch = portal_with(&[
        ("servername", json!("commander-1")),
        ("lua_log_level", json!("debug")),
    ])?;
    let merged = merge(&site, &patch)?;
    ensure!(merged.value("servername")? == "commander-1");
    ensure!(merged.value("lua_log_level")? == "debug");
    ensure!(merged.value("public_root")? == "/var/www/ood/public", "left values are kept");
    ensure!(merged.record("dex")? == site.record("dex")?, "default right Dex keeps the left");
    ensure!(site.value("servername")? == "10.69.205.59", "operands are not modified");
    Ok(())
}

#[rstest]
fn nested_records_are_replaced_wholesale(site: Record) -> Result<()> {
    let patch = portal_with(&[("dex", json!({"http_port": 5556}))])?;
    let merged = merge(&site, &patch)?;
    let provider = merged.record("dex")?;
    ensure!(provider.value("http_port")? == &json!(5556));
    ensure!(provider.value("client_name")?.is_null(), "left Dex fields are not combined");
    Ok(())
}

#[rstest]
fn reflected_merge_takes_the_receiver_as_right(site: Record) -> Result<()> {
    let patch = portal_with(&[("servername", json!("commander-1"))])?;
    ensure!(merge_reflected(&patch, &site)? == merge(&site, &patch)?);
    Ok(())
}

#[rstest]
fn disjoint_overrides_merge_symmetrically() -> Result<()> {
    let left = portal_with(&[("servername", json!("commander-1"))])?;
    let right = portal_with(&[("port", json!(8080))])?;
    ensure!(merge(&left, &right)? == merge(&right, &left)?);
    Ok(())
}

#[rstest]
fn overlapping_overrides_favour_the_right() -> Result<()> {
    let left = portal_with(&[("port", json!(443))])?;
    let right = portal_with(&[("port", json!(8080))])?;
    ensure!(merge(&left, &right)?.value("port")? == &json!(8080));
    ensure!(merge(&right, &left)?.value("port")? == &json!(443));
    Ok(())
}

#[rstest]
fn in_place_merge_rewrites_the_left(mut site: Record) -> Result<()> {
    let patch = portal_with(&[("servername", json!("commander-1"))])?;
    let expected = merge(&site, &patch)?;
    merge_in_place(&mut site, &patch)?;
    ensure!(site == expected);
    Ok(())
}

#[rstest]
fn explicit_defaults_on_the_right_do_not_override(site: Record) -> Result<()> {
    let patch = portal_with(&[("servername", json!(null))])?;
    let merged = merge(&site, &patch)?;
    ensure!(merged.value("servername")? == "10.69.205.59");
    Ok(())
}

#[rstest]
fn merging_different_kinds_fails_for_every_form(mut site: Record) -> Result<()> {
    let stage = nginx_stage::new();
    let before = site.clone();

    let err = merge(&site, &stage).expect_err("cross-kind merge");
    ensure!(err.kind() == ErrorKind::SchemaMismatch, "unexpected error: {err}");
    let err = merge_reflected(&stage, &site).expect_err("cross-kind merge");
    ensure!(err.kind() == ErrorKind::SchemaMismatch, "unexpected error: {err}");
    let err = merge_in_place(&mut site, &stage).expect_err("cross-kind merge");
    ensure!(err.kind() == ErrorKind::SchemaMismatch, "unexpected error: {err}");

    ensure!(site == before, "a failed in-place merge leaves the left untouched");
    Ok(())
}
