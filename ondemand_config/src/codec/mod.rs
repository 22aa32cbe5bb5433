//! Conversion between records and YAML documents.
//!
//! Documents are produced from [`Record::to_mapping`] and prefixed with a
//! comment [`Banner`]. Parsing goes the other way through
//! [`Record::from_value`], so unknown keys fail exactly as they do for
//! in-memory construction. The banner is only a comment and never takes part
//! in equality.

mod banner;
mod yaml;

use chrono::{DateTime, Utc};

use crate::error::ConfigResult;
use crate::record::Record;
use crate::schema::Schema;

pub use banner::Banner;

/// Render `record` as a YAML document stamped with the current time.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Emit`] if the YAML emitter fails.
pub fn to_document(record: &Record) -> ConfigResult<String> {
    to_document_at(record, Utc::now())
}

/// Render `record` as a YAML document stamped with `generated_at`.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Emit`] if the YAML emitter fails.
pub fn to_document_at(record: &Record, generated_at: DateTime<Utc>) -> ConfigResult<String> {
    let body = yaml::emit(&record.to_mapping())?;
    Ok(format!("{}{body}", Banner::new(record.schema(), generated_at)))
}

/// Parse a YAML document into a record of `schema`.
///
/// Empty and comment-only documents yield the all-default record.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Parse`] for malformed YAML and any error of
/// [`Record::from_value`].
pub fn from_document(schema: &'static Schema, text: &str) -> ConfigResult<Record> {
    Record::from_value(schema, yaml::parse(text)?)
}
