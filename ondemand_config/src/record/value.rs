//! Values accepted by and returned from record fields.

use serde_json::{Map, Value};

use super::Record;

/// An owned value on its way into a record field.
///
/// Plain fields accept [`FieldValue::Value`]; nested fields accept a
/// [`FieldValue::Record`] of their sub-schema or a mapping convertible to one.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A generic value tree.
    Value(Value),
    /// A sub-record.
    Record(Record),
}

/// A borrowed view of a record field.
#[derive(Clone, Copy, Debug)]
pub enum FieldRef<'a> {
    /// A plain field's value.
    Value(&'a Value),
    /// A nested field's sub-record.
    Record(&'a Record),
}

impl FieldRef<'_> {
    /// The field as a generic value tree, nested records expanded.
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Record(record) => Value::Object(record.to_mapping()),
        }
    }
}

impl From<FieldRef<'_>> for FieldValue {
    fn from(field: FieldRef<'_>) -> Self {
        match field {
            FieldRef::Value(value) => Self::Value(value.clone()),
            FieldRef::Record(record) => Self::Record(record.clone()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Record> for FieldValue {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Map<String, Value>> for FieldValue {
    fn from(map: Map<String, Value>) -> Self {
        Self::Value(Value::Object(map))
    }
}

impl From<Vec<Value>> for FieldValue {
    fn from(items: Vec<Value>) -> Self {
        Self::Value(Value::Array(items))
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Value(Value::from(text))
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Value(Value::String(text))
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        Self::Value(Value::Bool(flag))
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        Self::Value(Value::from(number))
    }
}

impl From<u64> for FieldValue {
    fn from(number: u64) -> Self {
        Self::Value(Value::from(number))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Value(Value::Null), Into::into)
    }
}
