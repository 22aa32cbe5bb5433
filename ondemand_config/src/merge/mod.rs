//! Override merging between records of the same schema.
//!
//! The right-hand operand wins every top-level field where it differs from
//! the schema default; everywhere else the left-hand value is kept. Nested
//! sub-records are taken wholesale from whichever side wins, never combined
//! field by field.
//!
//! "Differs from the default" is the only override signal. A field the caller
//! explicitly set back to its default on the right looks untouched, so the
//! left value survives.
//!
//! ```
//! use ondemand_config::{merge, ood_portal};
//! use serde_json::json;
//!
//! let mut base = ood_portal::new();
//! base.set("servername", "10.69.205.59")?;
//! let mut patch = ood_portal::new();
//! patch.set("lua_log_level", "debug")?;
//!
//! let merged = merge(&base, &patch)?;
//! assert_eq!(merged.value("servername")?, &json!("10.69.205.59"));
//! assert_eq!(merged.value("lua_log_level")?, &json!("debug"));
//! # Ok::<(), ondemand_config::ConfigError>(())
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::record::Record;

/// Combine `left` and `right` into a new record, leaving both untouched.
///
/// # Errors
///
/// Returns [`ConfigError::SchemaMismatch`] when the operands belong to
/// different schemas, even structurally identical ones.
pub fn merge(left: &Record, right: &Record) -> ConfigResult<Record> {
    ensure_same_schema(left, right)?;
    let mut merged = left.clone();
    for name in right.overrides() {
        merged.set(name, right.field(name)?)?;
    }
    Ok(merged)
}

/// Merge with the receiver as the right-hand operand.
///
/// `merge_reflected(b, a)` is `merge(a, b)`: callers holding the override
/// record can apply it over a base without swapping arguments.
///
/// # Errors
///
/// Same as [`merge`].
pub fn merge_reflected(right: &Record, left: &Record) -> ConfigResult<Record> {
    merge(left, right)
}

/// Merge `right` into `left`, replacing `left`'s storage with the result.
///
/// # Errors
///
/// Same as [`merge`]; `left` is unchanged on error.
pub fn merge_in_place(left: &mut Record, right: &Record) -> ConfigResult<()> {
    *left = merge(left, right)?;
    Ok(())
}

fn ensure_same_schema(left: &Record, right: &Record) -> ConfigResult<()> {
    if left.schema().same_as(right.schema()) {
        Ok(())
    } else {
        Err(ConfigError::schema_mismatch(left.schema(), right.schema()))
    }
}

#[cfg(test)]
mod tests;
