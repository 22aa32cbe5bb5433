//! `ood_portal.yml`: settings of the portal's Apache front end.
//!
//! The `dex` field holds a nested [`crate::dex`] record. It accepts a Dex
//! record or a mapping, reads back as the all-default Dex record when unset,
//! and is reset to that record by [`Record::clear`].
//!
//! ```
//! use ondemand_config::{ErrorKind, dex, ood_portal};
//! use serde_json::json;
//!
//! let mut portal = ood_portal::new();
//! portal.set("dex", json!({"http_port": 5556}))?;
//! assert_eq!(portal.record("dex")?.value("http_port")?, &json!(5556));
//!
//! let err = portal.set("dex", "awjeezrick").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//!
//! portal.clear("dex")?;
//! assert_eq!(portal.record("dex")?, &dex::new());
//! # Ok::<(), ondemand_config::ConfigError>(())
//! ```

use camino::Utf8Path;
use serde_json::{Map, Value};

use crate::dex;
use crate::editor::Editor;
use crate::error::{ConfigError, ConfigResult};
use crate::record::Record;
use crate::schema::{FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::plain("listen_addr_port"),
    FieldSpec::plain("servername"),
    FieldSpec::plain("server_aliases"),
    FieldSpec::plain("proxy_server"),
    FieldSpec::plain("port"),
    FieldSpec::plain("ssl"),
    FieldSpec::plain("logroot"),
    FieldSpec::plain("errorlog"),
    FieldSpec::plain("accesslog"),
    FieldSpec::plain("logformat"),
    FieldSpec::plain("use_rewrites"),
    FieldSpec::plain("use_maintenance"),
    FieldSpec::plain("maintenance_ip_allowlist"),
    FieldSpec::plain("security_csp_frame_ancestors"),
    FieldSpec::plain("security_strict_transport"),
    FieldSpec::plain("custom_vhost_directives"),
    FieldSpec::plain("custom_location_directives"),
    FieldSpec::plain("lua_root"),
    FieldSpec::plain("lua_log_level"),
    FieldSpec::plain("user_map_match"),
    FieldSpec::plain("user_map_cmd"),
    FieldSpec::plain("user_env"),
    FieldSpec::plain("map_fail_uri"),
    FieldSpec::plain("pun_stage_cmd"),
    FieldSpec::plain("auth"),
    FieldSpec::plain("root_uri"),
    FieldSpec::plain("analytics"),
    FieldSpec::plain("public_uri"),
    FieldSpec::plain("public_root"),
    FieldSpec::plain("logout_uri"),
    FieldSpec::plain("logout_redirect"),
    FieldSpec::plain("host_regex"),
    FieldSpec::plain("node_uri"),
    FieldSpec::plain("rnode_uri"),
    FieldSpec::plain("nginx_uri"),
    FieldSpec::plain("pun_uri"),
    FieldSpec::plain("pun_socket_root"),
    FieldSpec::plain("pun_max_retries"),
    FieldSpec::plain("pun_pre_hook_root_cmd"),
    FieldSpec::plain("pun_pre_hook_exports"),
    FieldSpec::plain("oidc_uri"),
    FieldSpec::plain("oidc_discover_uri"),
    FieldSpec::plain("oidc_discover_root"),
    FieldSpec::plain("register_uri"),
    FieldSpec::plain("register_root"),
    FieldSpec::plain("oidc_provider_metadata_url"),
    FieldSpec::plain("oidc_client_id"),
    FieldSpec::plain("oidc_client_secret"),
    FieldSpec::plain("oidc_remote_user_claim"),
    FieldSpec::plain("oidc_scope"),
    FieldSpec::plain("oidc_session_inactivity_timeout"),
    FieldSpec::plain("oidc_session_max_duration"),
    FieldSpec::plain("oidc_state_max_number_of_cookies"),
    FieldSpec::plain("oidc_cookie_same_site"),
    FieldSpec::plain("oidc_settings"),
    FieldSpec::plain("dex_uri"),
    FieldSpec::nested("dex", &dex::SCHEMA),
];

/// Schema of `ood_portal.yml`.
pub static SCHEMA: Schema = Schema::new("OodPortalConfig", "ood_portal.yml", FIELDS);

/// Document operations bound to [`SCHEMA`].
pub static EDITOR: Editor = Editor::new(&SCHEMA);

/// An all-default `ood_portal.yml` record.
#[must_use]
pub fn new() -> Record {
    EDITOR.create()
}

/// A record built from a partial mapping.
///
/// # Errors
///
/// Returns [`ConfigError::SchemaViolation`] for undeclared keys.
pub fn from_mapping(partial: Map<String, Value>) -> ConfigResult<Record> {
    EDITOR.from_mapping(partial)
}

/// Deserialise the `ood_portal.yml` file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when `path` does not exist, and any
/// read, parse or schema error.
pub fn load(path: impl AsRef<Utf8Path>) -> ConfigResult<Record> {
    EDITOR.load(path.as_ref())
}

/// Deserialise an `ood_portal.yml` document string.
///
/// # Errors
///
/// Returns any parse or schema error.
pub fn loads(text: &str) -> ConfigResult<Record> {
    EDITOR.loads(text)
}

/// Serialise `record` into the file at `path`, overwriting it.
///
/// # Errors
///
/// Returns [`ConfigError::SchemaMismatch`] for a record of another kind, and
/// any emit or write error.
pub fn dump(record: &Record, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
    EDITOR.dump(record, path.as_ref())
}

/// Serialise `record` into a document string.
///
/// # Errors
///
/// Returns [`ConfigError::SchemaMismatch`] for a record of another kind, and
/// any emit error.
pub fn dumps(record: &Record) -> ConfigResult<String> {
    EDITOR.dumps(record)
}

/// Edit the `ood_portal.yml` file at `path` in place.
///
/// A missing file is edited from defaults and created on save.
///
/// # Errors
///
/// See [`Editor::edit`].
pub fn edit<T, E, F>(path: impl AsRef<Utf8Path>, f: F) -> Result<T, E>
where
    F: FnOnce(&mut Record) -> Result<T, E>,
    E: From<ConfigError>,
{
    EDITOR.edit(path.as_ref(), f)
}
