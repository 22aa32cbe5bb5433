//! Static field declarations shared by every record of a model.
//!
//! A [`Schema`] is declared once per configuration kind as a `static` and
//! never changes afterwards. Records hold a `&'static Schema`, so the schema's
//! address doubles as its identity: two schemas listing the same fields are
//! still distinct models and never merge.
//!
//! ```
//! use ondemand_config::schema::{DefaultValue, FieldSpec, Schema};
//!
//! static FIELDS: &[FieldSpec] = &[
//!     FieldSpec::plain("servername"),
//!     FieldSpec::with_default("port", DefaultValue::Integer(8080)),
//! ];
//! static DEMO: Schema = Schema::new("DemoConfig", "demo.yml", FIELDS);
//!
//! assert_eq!(DEMO.position("port"), Some(1));
//! assert!(DEMO.field("log_root").is_none());
//! ```

use std::ptr;

use serde_json::{Map, Value};

/// Default value of a plain field.
///
/// Defaults are descriptors rather than values: every call to
/// [`DefaultValue::to_value`] builds a fresh [`Value`], so records never share
/// mutable default storage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum DefaultValue {
    /// `null`.
    Null,
    /// A boolean literal.
    Bool(bool),
    /// An integer literal.
    Integer(i64),
    /// A string literal.
    Str(&'static str),
    /// An empty list.
    EmptyList,
    /// An empty mapping.
    EmptyMap,
}

impl DefaultValue {
    /// Materialise the default as a new value.
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(flag) => Value::Bool(flag),
            Self::Integer(number) => Value::from(number),
            Self::Str(text) => Value::from(text),
            Self::EmptyList => Value::Array(Vec::new()),
            Self::EmptyMap => Value::Object(Map::new()),
        }
    }
}

/// Shape of a schema field.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Holds a generic value, starting from the given default.
    Plain(DefaultValue),
    /// Holds a sub-record of the given schema, starting from its defaults.
    Nested(&'static Schema),
}

/// Declaration of one field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
}

impl FieldSpec {
    /// A plain field defaulting to `null`.
    #[must_use]
    pub const fn plain(name: &'static str) -> Self {
        Self::with_default(name, DefaultValue::Null)
    }

    /// A plain field with an explicit default.
    #[must_use]
    pub const fn with_default(name: &'static str, default: DefaultValue) -> Self {
        Self {
            name,
            kind: FieldKind::Plain(default),
        }
    }

    /// A field holding a sub-record of `schema`.
    #[must_use]
    pub const fn nested(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            kind: FieldKind::Nested(schema),
        }
    }

    /// The field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field shape.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The sub-record schema when this is a nested field.
    #[must_use]
    pub const fn nested_schema(&self) -> Option<&'static Schema> {
        match self.kind {
            FieldKind::Nested(schema) => Some(schema),
            FieldKind::Plain(_) => None,
        }
    }
}

/// Ordered, immutable declaration of a model's fields.
#[derive(Debug)]
pub struct Schema {
    name: &'static str,
    document: &'static str,
    fields: &'static [FieldSpec],
}

impl Schema {
    /// Declare a schema.
    ///
    /// `name` identifies the model in errors and document banners;
    /// `document` is the conventional file name of its YAML document.
    #[must_use]
    pub const fn new(
        name: &'static str,
        document: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            name,
            document,
            fields,
        }
    }

    /// Model name, e.g. `NginxStageConfig`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Conventional document file name, e.g. `nginx_stage.yml`.
    #[must_use]
    pub const fn document(&self) -> &'static str {
        self.document
    }

    /// Field declarations in document order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Number of declared fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of `name` in declaration order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }

    /// Declaration of `name`, if the schema has such a field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(FieldSpec::name)
    }

    /// Whether `self` and `other` are the same model.
    ///
    /// Compares declaration identity, not field lists.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

#[cfg(test)]
mod tests;
