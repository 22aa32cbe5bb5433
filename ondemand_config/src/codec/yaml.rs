//! YAML parsing and emission for the generic value tree.
//!
//! Both directions use the YAML 1.2 core schema of `serde_yaml`: only
//! `true`/`false` are booleans, `null`, `~` and empty scalars are null, and
//! the emitter quotes any string the parser would read back as another type.

use serde::de::Error as _;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

use crate::error::{ConfigError, ConfigResult};

/// Parse YAML into an ordered value tree.
///
/// Documents holding only comments, blank lines or a document marker parse
/// to `null`. Duplicate mapping keys are rejected.
pub(super) fn parse(text: &str) -> ConfigResult<Value> {
    if is_blank(text) {
        return Ok(Value::Null);
    }
    let document: YamlValue = serde_yaml::from_str(text)?;
    into_tree(document)
}

/// Emit a mapping as block-style YAML, quoting scalars that would otherwise
/// read back as a different type.
pub(super) fn emit(tree: &Map<String, Value>) -> ConfigResult<String> {
    serde_yaml::to_string(tree).map_err(ConfigError::emit)
}

fn into_tree(value: YamlValue) -> ConfigResult<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(flag) => Value::Bool(flag),
        YamlValue::Number(number) => Value::Number(into_number(&number)?),
        YamlValue::String(text) => Value::String(text),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(into_tree)
                .collect::<ConfigResult<_>>()?,
        ),
        YamlValue::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, item)| Ok((into_key(key)?, into_tree(item)?)))
                .collect::<ConfigResult<_>>()?,
        ),
        YamlValue::Tagged(tagged) => into_tree(tagged.value)?,
    })
}

fn into_number(number: &serde_yaml::Number) -> ConfigResult<Number> {
    if let Some(unsigned) = number.as_u64() {
        return Ok(Number::from(unsigned));
    }
    if let Some(signed) = number.as_i64() {
        return Ok(Number::from(signed));
    }
    number
        .as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| unsupported(format!("non-finite number `{number}`")))
}

/// Scalar keys become their textual form; collection and null keys have no
/// place in a configuration document.
fn into_key(key: YamlValue) -> ConfigResult<String> {
    match key {
        YamlValue::String(text) => Ok(text),
        YamlValue::Bool(flag) => Ok(flag.to_string()),
        YamlValue::Number(number) => Ok(number.to_string()),
        YamlValue::Tagged(tagged) => into_key(tagged.value),
        YamlValue::Null | YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
            Err(unsupported("mapping keys must be scalars".to_owned()))
        }
    }
}

fn unsupported(message: String) -> ConfigError {
    ConfigError::from(serde_yaml::Error::custom(message))
}

fn is_blank(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}
