//! `nginx_stage.yml`: settings of the per-user nginx (PUN) spawner.
//!
//! ```no_run
//! use ondemand_config::nginx_stage;
//! use serde_json::json;
//!
//! nginx_stage::edit("/etc/ood/config/nginx_stage.yml", |stage| {
//!     stage.set("passenger_ruby", "/snap/ondemand/common/usr/bin/ruby")?;
//!     stage
//!         .list_mut("pun_custom_env_declarations")?
//!         .push(json!("CPATH"));
//!     Ok::<_, ondemand_config::ConfigError>(())
//! })?;
//! # Ok::<(), ondemand_config::ConfigError>(())
//! ```

use camino::Utf8Path;
use serde_json::{Map, Value};

use crate::editor::Editor;
use crate::error::{ConfigError, ConfigResult};
use crate::record::Record;
use crate::schema::{FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::plain("ondemand_version_path"),
    FieldSpec::plain("ondemand_portal"),
    FieldSpec::plain("ondemand_title"),
    FieldSpec::plain("pun_custom_env"),
    FieldSpec::plain("pun_custom_env_declarations"),
    FieldSpec::plain("template_root"),
    FieldSpec::plain("proxy_user"),
    FieldSpec::plain("nginx_bin"),
    FieldSpec::plain("nginx_signals"),
    FieldSpec::plain("mime_types_path"),
    FieldSpec::plain("passenger_root"),
    FieldSpec::plain("passenger_ruby"),
    FieldSpec::plain("passenger_nodejs"),
    FieldSpec::plain("passenger_python"),
    FieldSpec::plain("passenger_pool_idle_time"),
    FieldSpec::plain("passenger_options"),
    FieldSpec::plain("nginx_file_upload_max"),
    FieldSpec::plain("pun_config_path"),
    FieldSpec::plain("pun_tmp_root"),
    FieldSpec::plain("pun_access_log_path"),
    FieldSpec::plain("pun_error_log_path"),
    FieldSpec::plain("pun_secret_key_base_path"),
    FieldSpec::plain("pun_log_format"),
    FieldSpec::plain("pun_pid_path"),
    FieldSpec::plain("pun_socket_path"),
    FieldSpec::plain("pun_sendfile_root"),
    FieldSpec::plain("pun_sendfile_uri"),
    FieldSpec::plain("pun_app_configs"),
    FieldSpec::plain("app_config_path"),
    FieldSpec::plain("app_root"),
    FieldSpec::plain("app_request_uri"),
    FieldSpec::plain("app_request_regex"),
    FieldSpec::plain("app_token"),
    FieldSpec::plain("app_passenger_env"),
    FieldSpec::plain("user_regex"),
    FieldSpec::plain("min_uid"),
    FieldSpec::plain("disabled_shell"),
    FieldSpec::plain("disable_bundle_user_config"),
];

/// Schema of `nginx_stage.yml`.
pub static SCHEMA: Schema = Schema::new("NginxStageConfig", "nginx_stage.yml", FIELDS);

/// Document operations bound to [`SCHEMA`].
pub static EDITOR: Editor = Editor::new(&SCHEMA);

/// An all-default `nginx_stage.yml` record.
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

/// Deserialise the `nginx_stage.yml` file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when `path` does not exist, and any
/// read, parse or schema error.
pub fn load(path: impl AsRef<Utf8Path>) -> ConfigResult<Record> {
    EDITOR.load(path.as_ref())
}

/// Deserialise an `nginx_stage.yml` document string.
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

/// Edit the `nginx_stage.yml` file at `path` in place.
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
