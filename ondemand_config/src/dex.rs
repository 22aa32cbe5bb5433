//! Dex identity provider settings nested in `ood_portal.yml`.
//!
//! Dex records never stand alone as documents: they only appear as the `dex`
//! field of an [`crate::ood_portal`] record. Clearing that field leaves an
//! all-default Dex record in place, which is how "Dex not configured" is
//! represented.

use serde_json::{Map, Value};

use crate::error::ConfigResult;
use crate::record::Record;
use crate::schema::{FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::plain("ssl"),
    FieldSpec::plain("http_port"),
    FieldSpec::plain("https_port"),
    FieldSpec::plain("tls_cert"),
    FieldSpec::plain("tls_key"),
    FieldSpec::plain("storage_file"),
    FieldSpec::plain("grpc"),
    FieldSpec::plain("expiry"),
    FieldSpec::plain("client_id"),
    FieldSpec::plain("client_name"),
    FieldSpec::plain("client_secret"),
    FieldSpec::plain("client_redirect_uris"),
    FieldSpec::plain("connectors"),
    FieldSpec::plain("frontend"),
];

/// Schema of the `dex` section.
pub static SCHEMA: Schema = Schema::new("DexConfig", "ood_portal.yml", FIELDS);

/// An all-default Dex record.
#[must_use]
pub fn new() -> Record {
    Record::new(&SCHEMA)
}

/// A Dex record built from a partial mapping.
///
/// # Errors
///
/// Returns [`crate::ConfigError::SchemaViolation`] for keys Dex does not
/// declare.
pub fn from_mapping(partial: Map<String, Value>) -> ConfigResult<Record> {
    Record::from_mapping(&SCHEMA, partial)
}
