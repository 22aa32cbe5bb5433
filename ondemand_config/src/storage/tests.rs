//! Unit tests for document storage primitives.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use anyhow::{Result, ensure};
use camino::Utf8Path;
use rstest::rstest;
use test_helpers::workspace::TempWorkspace;

use super::{exists, parent_or_dot, read, write};
use crate::error::ErrorKind;

#[rstest]
#[case("nginx_stage.yml", ".")]
#[case("/etc/ood/config/ood_portal.yml", "/etc/ood/config")]
#[case("config/ood_portal.yml", "config")]
fn parent_falls_back_to_dot(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(parent_or_dot(Utf8Path::new(path)), Utf8Path::new(expected));
}

#[test]
fn write_then_read_round_trips() -> Result<()> {
    let workspace = TempWorkspace::new()?;
    let path = workspace.path("nginx_stage.yml");
    ensure!(!exists(&path), "fresh workspace should be empty");
    write(&path, "min_uid: 1000\n")?;
    ensure!(exists(&path), "document should exist after write");
    ensure!(read(&path)? == "min_uid: 1000\n", "contents should survive");
    write(&path, "min_uid: 500\n")?;
    ensure!(read(&path)? == "min_uid: 500\n", "overwrite should replace contents");
    Ok(())
}

#[test]
fn reading_a_missing_document_is_not_found() -> Result<()> {
    let workspace = TempWorkspace::new()?;
    let err = read(&workspace.path("missing.yml")).expect_err("missing file");
    ensure!(err.kind() == ErrorKind::NotFound, "unexpected error: {err}");
    ensure!(err.to_string().contains("missing.yml"), "path should be reported");
    Ok(())
}

#[test]
fn missing_parent_directory_is_not_found() -> Result<()> {
    let workspace = TempWorkspace::new()?;
    let path = workspace.path("absent/ood_portal.yml");
    ensure!(!exists(&path), "nothing exists under a missing directory");
    let err = read(&path).expect_err("missing parent");
    ensure!(err.kind() == ErrorKind::NotFound, "unexpected error: {err}");
    let err = write(&path, "port: 80\n").expect_err("missing parent");
    ensure!(err.kind() == ErrorKind::NotFound, "unexpected error: {err}");
    Ok(())
}

#[test]
fn directories_are_not_documents() -> Result<()> {
    let workspace = TempWorkspace::new()?;
    std::fs::create_dir(workspace.path("config"))?;
    ensure!(!exists(&workspace.path("config")), "a directory is not a file");
    Ok(())
}
