//! Constructors and classification helpers for `ConfigError`.

use camino::Utf8Path;
use serde_json::Value;

use super::{ConfigError, ErrorKind};
use crate::schema::Schema;

impl ConfigError {
    /// Build a [`ConfigError::SchemaViolation`] for `field` on `schema`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ondemand_config::{ConfigError, ErrorKind, nginx_stage};
    ///
    /// let err = ConfigError::schema_violation(&nginx_stage::SCHEMA, "log_root");
    /// assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    /// assert!(err.to_string().contains("log_root"));
    /// ```
    #[must_use]
    pub fn schema_violation(schema: &Schema, field: impl Into<String>) -> Self {
        Self::SchemaViolation {
            model: schema.name(),
            field: field.into(),
        }
    }

    /// Build a [`ConfigError::TypeMismatch`] for `field` on `schema`.
    #[must_use]
    pub fn type_mismatch(
        schema: &Schema,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            model: schema.name(),
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a [`ConfigError::SchemaMismatch`] between two schemas.
    #[must_use]
    pub const fn schema_mismatch(expected: &Schema, found: &Schema) -> Self {
        Self::SchemaMismatch {
            expected: expected.name(),
            found: found.name(),
        }
    }

    /// Build a [`ConfigError::NotFound`] for `path`.
    #[must_use]
    pub fn not_found(path: &Utf8Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    /// Wrap an IO failure, promoting [`std::io::ErrorKind::NotFound`] to
    /// [`ConfigError::NotFound`].
    #[must_use]
    pub fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap a YAML emitter failure.
    #[must_use]
    pub fn emit(source: serde_yaml::Error) -> Self {
        Self::Emit(Box::new(source))
    }

    /// Classify the error without borrowing its payload.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Emit(_) => ErrorKind::Emit,
        }
    }
}

/// Human-readable name of a value's shape for mismatch messages.
pub(crate) const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
