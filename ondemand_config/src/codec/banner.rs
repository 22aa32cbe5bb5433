//! Comment header written at the top of generated documents.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::schema::Schema;

/// Non-semantic header naming the model and when its document was written.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use ondemand_config::{codec::Banner, nginx_stage};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 59, 2).single().unwrap_or_default();
/// let banner = Banner::new(&nginx_stage::SCHEMA, at).to_string();
/// assert!(banner.contains("`nginx_stage.yml` (NginxStageConfig) generated at 2024-03-05T09:59:02Z"));
/// assert!(banner.lines().all(|line| line.is_empty() || line.starts_with('#')));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Banner<'a> {
    schema: &'a Schema,
    generated_at: DateTime<Utc>,
}

impl<'a> Banner<'a> {
    /// Banner for a document of `schema` written at `generated_at`.
    #[must_use]
    pub const fn new(schema: &'a Schema, generated_at: DateTime<Utc>) -> Self {
        Self {
            schema,
            generated_at,
        }
    }

    /// Generation timestamp.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#")?;
        writeln!(
            f,
            "# `{}` ({}) generated at {} by {} {}.",
            self.schema.document(),
            self.schema.name(),
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )?;
        writeln!(f, "#")?;
        writeln!(f)
    }
}
