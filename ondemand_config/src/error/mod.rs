//! Error types produced while building, merging and storing configuration
//! records.

mod constructors;
mod conversions;
mod types;

pub use types::{ConfigError, ErrorKind};

pub(crate) use constructors::describe;

/// Result alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;
