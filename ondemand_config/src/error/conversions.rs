//! Conversions from codec errors into `ConfigError`.

use super::ConfigError;

/// YAML errors surfacing through `?` come from reading documents; emitter
/// failures are wrapped explicitly with [`ConfigError::emit`].
impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(Box::new(e))
    }
}
