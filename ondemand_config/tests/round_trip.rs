//! Round-trip guarantees between records, documents and files.

use anyhow::{Result, ensure};
use ondemand_config::{Record, dex, nginx_stage, ood_portal};
use rstest::rstest;
use serde_json::json;
use test_helpers::fixtures::{NGINX_STAGE_YML, OOD_PORTAL_YML};
use test_helpers::workspace::TempWorkspace;

fn handcrafted_portal() -> Result<Record> {
    let mut provider = dex::new();
    provider.set("ssl", true)?;
    provider.set("connectors", json!([{"type": "ldap", "id": "ldap", "name": "LDAP"}]))?;

    let mut portal = ood_portal::new();
    portal.set("servername", "ondemand.example.org")?;
    portal.set("listen_addr_port", json!([80, 443]))?;
    portal.set("oidc_settings", json!({"OIDCPassIDTokenAs": "serialized"}))?;
    portal.set("oidc_cookie_same_site", "Off")?;
    portal.set("dex", provider)?;
    Ok(portal)
}

#[rstest]
fn sample_documents_survive_dumps_and_loads() -> Result<()> {
    let stage = nginx_stage::loads(NGINX_STAGE_YML)?;
    ensure!(nginx_stage::loads(&nginx_stage::dumps(&stage)?)? == stage);

    let portal = ood_portal::loads(OOD_PORTAL_YML)?;
    ensure!(ood_portal::loads(&ood_portal::dumps(&portal)?)? == portal);
    Ok(())
}

#[rstest]
fn handcrafted_records_survive_files() -> Result<()> {
    let workspace = TempWorkspace::new()?;
    let path = workspace.path("ood_portal.yml");
    let portal = handcrafted_portal()?;

    ood_portal::dump(&portal, &path)?;
    let reloaded = ood_portal::load(&path)?;
    ensure!(reloaded == portal);
    ensure!(reloaded.value("oidc_cookie_same_site")? == "Off");

    let overrides: Vec<_> = reloaded.overrides().collect();
    ensure!(
        overrides == ["listen_addr_port", "servername", "oidc_cookie_same_site", "oidc_settings", "dex"],
        "unexpected overrides: {overrides:?}"
    );
    Ok(())
}

#[rstest]
fn defaults_survive_and_dump_every_field() -> Result<()> {
    let defaults = nginx_stage::new();
    let document = nginx_stage::dumps(&defaults)?;
    for name in nginx_stage::SCHEMA.field_names() {
        ensure!(document.contains(&format!("\n{name}: null")), "`{name}` missing:\n{document}");
    }
    ensure!(nginx_stage::loads(&document)?.is_default());
    Ok(())
}

#[rstest]
fn records_serialize_as_their_mapping() -> Result<()> {
    let portal = handcrafted_portal()?;
    ensure!(serde_json::to_value(&portal)? == portal.clone().into_value());
    Ok(())
}
