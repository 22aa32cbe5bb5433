//! Primary error enum for configuration record and document handling.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by record construction, field access, merging and document
/// storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A mapping key or field name is not declared by the model's schema.
    #[error("`{field}` is not a field of {model}")]
    SchemaViolation {
        /// Name of the model whose schema rejected the field.
        model: &'static str,
        /// The offending field name.
        field: String,
    },

    /// A value of the wrong shape was supplied for, or requested from, a
    /// schema field.
    #[error("field `{field}` of {model} expects {expected}, found {found}")]
    TypeMismatch {
        /// Name of the model owning the field.
        model: &'static str,
        /// Field that rejected the value.
        field: String,
        /// Description of the accepted shape.
        expected: String,
        /// Description of the shape that was supplied.
        found: String,
    },

    /// Two records of different schemas were combined.
    #[error("cannot merge a {found} record into a {expected} record")]
    SchemaMismatch {
        /// Schema required by the operation.
        expected: &'static str,
        /// Schema of the record actually supplied.
        found: &'static str,
    },

    /// A configuration document does not exist at the given path.
    #[error("unable to locate file {path}")]
    NotFound {
        /// Path that was looked up.
        path: Utf8PathBuf,
    },

    /// Reading or writing a configuration document failed.
    #[error("I/O failure on {path}: {source}")]
    Io {
        /// Path of the document being accessed.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The document text is not valid YAML.
    #[error("failed to parse YAML document: {0}")]
    Parse(#[source] Box<serde_yaml::Error>),

    /// The record could not be rendered as YAML.
    #[error("failed to emit YAML document: {0}")]
    Emit(#[source] Box<serde_yaml::Error>),
}

/// Fieldless classification of [`ConfigError`] for matching at call sites.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`ConfigError::SchemaViolation`].
    SchemaViolation,
    /// See [`ConfigError::TypeMismatch`].
    TypeMismatch,
    /// See [`ConfigError::SchemaMismatch`].
    SchemaMismatch,
    /// See [`ConfigError::NotFound`].
    NotFound,
    /// See [`ConfigError::Io`].
    Io,
    /// See [`ConfigError::Parse`].
    Parse,
    /// See [`ConfigError::Emit`].
    Emit,
}
