//! Validated field access for [`Record`].
//!
//! Every read and write resolves the field name against the record's schema
//! first; a miss is a [`ConfigError::SchemaViolation`]. Plain and nested
//! fields have separate accessors, and using the wrong one is a
//! [`ConfigError::TypeMismatch`].

use serde_json::{Map, Value};

use super::{FieldRef, FieldValue, Record, Slot};
use crate::error::{ConfigError, ConfigResult, describe};
use crate::schema::{FieldKind, FieldSpec, Schema};

impl Record {
    /// Borrow any field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for an undeclared field.
    pub fn field(&self, name: &str) -> ConfigResult<FieldRef<'_>> {
        Ok(match self.slot(name)? {
            (_, Slot::Plain(value)) => FieldRef::Value(value),
            (_, Slot::Nested(record)) => FieldRef::Record(record),
        })
    }

    /// Borrow a plain field's value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for an undeclared field and
    /// [`ConfigError::TypeMismatch`] for a nested field.
    pub fn value(&self, name: &str) -> ConfigResult<&Value> {
        match self.slot(name)? {
            (_, Slot::Plain(value)) => Ok(value),
            (spec, Slot::Nested(_)) => Err(plain_access_on_nested(self.schema, spec)),
        }
    }

    /// Mutably borrow a plain field's value.
    ///
    /// The reference points at the record's own storage: edits made through
    /// it, including pushes onto a list or inserts into a mapping, are seen
    /// by every later read and by serialisation.
    ///
    /// # Errors
    ///
    /// Same as [`Record::value`].
    pub fn value_mut(&mut self, name: &str) -> ConfigResult<&mut Value> {
        let schema = self.schema;
        match self.slot_mut(name)? {
            (_, Slot::Plain(value)) => Ok(value),
            (spec, Slot::Nested(_)) => Err(plain_access_on_nested(schema, spec)),
        }
    }

    /// Mutably borrow the list stored in a plain field.
    ///
    /// ```
    /// use ondemand_config::nginx_stage;
    /// use serde_json::json;
    ///
    /// let mut stage = nginx_stage::from_mapping(
    ///     json!({"pun_custom_env_declarations": ["PATH"]})
    ///         .as_object()
    ///         .cloned()
    ///         .unwrap_or_default(),
    /// )?;
    /// stage.list_mut("pun_custom_env_declarations")?.push(json!("CPATH"));
    /// assert_eq!(
    ///     stage.value("pun_custom_env_declarations")?,
    ///     &json!(["PATH", "CPATH"])
    /// );
    /// # Ok::<(), ondemand_config::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Record::value`], plus [`ConfigError::TypeMismatch`] when the
    /// field does not currently hold a list (for instance a `null` default).
    pub fn list_mut(&mut self, name: &str) -> ConfigResult<&mut Vec<Value>> {
        let schema = self.schema;
        match self.value_mut(name)? {
            Value::Array(items) => Ok(items),
            other => Err(ConfigError::type_mismatch(
                schema,
                name,
                "a list",
                describe(other),
            )),
        }
    }

    /// Mutably borrow the mapping stored in a plain field.
    ///
    /// # Errors
    ///
    /// Same as [`Record::value`], plus [`ConfigError::TypeMismatch`] when the
    /// field does not currently hold a mapping.
    pub fn map_mut(&mut self, name: &str) -> ConfigResult<&mut Map<String, Value>> {
        let schema = self.schema;
        match self.value_mut(name)? {
            Value::Object(entries) => Ok(entries),
            other => Err(ConfigError::type_mismatch(
                schema,
                name,
                "a mapping",
                describe(other),
            )),
        }
    }

    /// Borrow a nested field's sub-record.
    ///
    /// An unset nested field yields its all-default sub-record, never an
    /// absent value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for an undeclared field and
    /// [`ConfigError::TypeMismatch`] for a plain field.
    pub fn record(&self, name: &str) -> ConfigResult<&Self> {
        match self.slot(name)? {
            (_, Slot::Nested(record)) => Ok(record),
            (spec, Slot::Plain(_)) => Err(nested_access_on_plain(self.schema, spec)),
        }
    }

    /// Mutably borrow a nested field's sub-record.
    ///
    /// # Errors
    ///
    /// Same as [`Record::record`].
    pub fn record_mut(&mut self, name: &str) -> ConfigResult<&mut Self> {
        let schema = self.schema;
        match self.slot_mut(name)? {
            (_, Slot::Nested(record)) => Ok(record),
            (spec, Slot::Plain(_)) => Err(nested_access_on_plain(schema, spec)),
        }
    }

    /// Assign a field.
    ///
    /// Plain fields take any generic value. Nested fields take a record of
    /// their sub-schema, a mapping (converted with
    /// [`Record::from_mapping`]) or `null`, which clears the field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for an undeclared field or a
    /// mapping key the sub-schema does not declare, and
    /// [`ConfigError::TypeMismatch`] for a value the field cannot hold. The
    /// record is unchanged on error.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> ConfigResult<()> {
        let schema = self.schema;
        let (spec, slot) = self.slot_mut(name)?;
        *slot = validate(schema, spec, value.into())?;
        Ok(())
    }

    /// Reset a field to its schema default.
    ///
    /// A nested field receives a fresh all-default sub-record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for an undeclared field.
    pub fn clear(&mut self, name: &str) -> ConfigResult<()> {
        let (spec, slot) = self.slot_mut(name)?;
        *slot = Slot::default_for(spec);
        Ok(())
    }

    /// Whether a field still holds its schema default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for an undeclared field.
    pub fn is_field_default(&self, name: &str) -> ConfigResult<bool> {
        let (spec, slot) = self.slot(name)?;
        Ok(slot.is_default(spec))
    }
}

fn validate(schema: &Schema, spec: &FieldSpec, incoming: FieldValue) -> ConfigResult<Slot> {
    match (spec.kind(), incoming) {
        (FieldKind::Plain(_), FieldValue::Value(value)) => Ok(Slot::Plain(value)),
        (FieldKind::Plain(_), FieldValue::Record(record)) => Err(ConfigError::type_mismatch(
            schema,
            spec.name(),
            "a plain value",
            format!("a {} record", record.schema().name()),
        )),
        (FieldKind::Nested(nested), FieldValue::Record(record)) => {
            if record.schema().same_as(nested) {
                Ok(Slot::Nested(record))
            } else {
                Err(ConfigError::type_mismatch(
                    schema,
                    spec.name(),
                    nested_expectation(nested),
                    format!("a {} record", record.schema().name()),
                ))
            }
        }
        (FieldKind::Nested(nested), FieldValue::Value(Value::Object(partial))) => {
            Record::from_mapping(nested, partial).map(Slot::Nested)
        }
        (FieldKind::Nested(nested), FieldValue::Value(Value::Null)) => {
            Ok(Slot::Nested(Record::new(nested)))
        }
        (FieldKind::Nested(nested), FieldValue::Value(other)) => Err(ConfigError::type_mismatch(
            schema,
            spec.name(),
            nested_expectation(nested),
            describe(&other),
        )),
    }
}

fn nested_expectation(nested: &Schema) -> String {
    format!("a {} record or a mapping", nested.name())
}

fn plain_access_on_nested(schema: &Schema, spec: &FieldSpec) -> ConfigError {
    let nested = spec.nested_schema().map_or("nested", Schema::name);
    ConfigError::type_mismatch(
        schema,
        spec.name(),
        "a plain value accessor",
        format!("a {nested} record field"),
    )
}

fn nested_access_on_plain(schema: &Schema, spec: &FieldSpec) -> ConfigError {
    ConfigError::type_mismatch(schema, spec.name(), "a nested record field", "a plain field")
}
