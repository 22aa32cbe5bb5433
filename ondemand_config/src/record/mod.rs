//! Schema-constrained configuration records.
//!
//! A [`Record`] always carries exactly one slot per field of its
//! [`Schema`], in declaration order. Slots are filled from the schema
//! defaults on construction and are only ever replaced through the validated
//! accessors in this module, so unknown fields cannot appear and declared
//! fields cannot go missing.
//!
//! ```
//! use ondemand_config::{Record, ood_portal};
//! use serde_json::json;
//!
//! let mut portal = Record::new(&ood_portal::SCHEMA);
//! portal.set("servername", "ondemand.example.org")?;
//! portal.set("dex", json!({"http_port": 5556}))?;
//!
//! assert_eq!(portal.record("dex")?.value("http_port")?, &json!(5556));
//! assert!(portal.set("log_root", "/var/log").is_err());
//! # Ok::<(), ondemand_config::ConfigError>(())
//! ```

mod access;
mod value;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ConfigError, ConfigResult, describe};
use crate::schema::{FieldKind, FieldSpec, Schema};

pub use value::{FieldRef, FieldValue};

/// Pseudo-field named in errors about a document root that is not a mapping.
pub const DOCUMENT_ROOT: &str = "<document>";

#[derive(Clone, Debug)]
enum Slot {
    Plain(Value),
    Nested(Record),
}

impl Slot {
    fn default_for(spec: &FieldSpec) -> Self {
        match spec.kind() {
            FieldKind::Plain(default) => Self::Plain(default.to_value()),
            FieldKind::Nested(schema) => Self::Nested(Record::new(schema)),
        }
    }

    fn is_default(&self, spec: &FieldSpec) -> bool {
        match (self, spec.kind()) {
            (Self::Plain(value), FieldKind::Plain(default)) => *value == default.to_value(),
            (Self::Nested(record), FieldKind::Nested(_)) => record.is_default(),
            _ => false,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Plain(value) => value.clone(),
            Self::Nested(record) => Value::Object(record.to_mapping()),
        }
    }
}

/// A fully populated configuration record bound to one [`Schema`].
#[derive(Clone, Debug)]
pub struct Record {
    schema: &'static Schema,
    slots: Vec<Slot>,
}

impl Record {
    /// Build a record with every field at its schema default.
    #[must_use]
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            slots: schema.fields().iter().map(Slot::default_for).collect(),
        }
    }

    /// Build a record from a partial mapping.
    ///
    /// Keys override the defaults of the matching fields and pass through
    /// [`Record::set`], so nested fields are type-checked here as well.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for a key the schema does not
    /// declare and [`ConfigError::TypeMismatch`] for a value a nested field
    /// cannot accept.
    pub fn from_mapping(schema: &'static Schema, partial: Map<String, Value>) -> ConfigResult<Self> {
        let mut record = Self::new(schema);
        for (field, value) in partial {
            record.set(&field, value)?;
        }
        Ok(record)
    }

    /// Build a record from a generic value tree.
    ///
    /// `null` yields the defaults, a mapping is handed to
    /// [`Record::from_mapping`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] on the [`DOCUMENT_ROOT`]
    /// pseudo-field when `value` is neither, plus any error of
    /// [`Record::from_mapping`].
    pub fn from_value(schema: &'static Schema, value: Value) -> ConfigResult<Self> {
        match value {
            Value::Null => Ok(Self::new(schema)),
            Value::Object(partial) => Self::from_mapping(schema, partial),
            other => Err(ConfigError::type_mismatch(
                schema,
                DOCUMENT_ROOT,
                "a mapping",
                describe(&other),
            )),
        }
    }

    /// The schema this record conforms to.
    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Ordered key-value tree of every field, nested records expanded.
    #[must_use]
    pub fn to_mapping(&self) -> Map<String, Value> {
        self.entries()
            .map(|(spec, slot)| (spec.name().to_owned(), slot.to_value()))
            .collect()
    }

    /// Consume the record into a [`Value::Object`].
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.to_mapping())
    }

    /// Whether every field still holds its schema default.
    ///
    /// An all-default sub-record is how an unset nested field is represented.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.entries().all(|(spec, slot)| slot.is_default(spec))
    }

    /// Names of the fields whose values differ from their defaults, in schema
    /// order.
    pub fn overrides(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries()
            .filter(|(spec, slot)| !slot.is_default(spec))
            .map(|(spec, _)| spec.name())
    }

    fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &Slot)> + '_ {
        self.schema.fields().iter().zip(&self.slots)
    }

    fn slot(&self, name: &str) -> ConfigResult<(&'static FieldSpec, &Slot)> {
        self.entries()
            .find(|(spec, _)| spec.name() == name)
            .ok_or_else(|| ConfigError::schema_violation(self.schema, name))
    }

    fn slot_mut(&mut self, name: &str) -> ConfigResult<(&'static FieldSpec, &mut Slot)> {
        let schema = self.schema;
        schema
            .fields()
            .iter()
            .zip(self.slots.iter_mut())
            .find(|(spec, _)| spec.name() == name)
            .ok_or_else(|| ConfigError::schema_violation(schema, name))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.to_mapping() == other.to_mapping()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_mapping().serialize(serializer)
    }
}
