//! Schema-checked models for Open OnDemand configuration documents.
//!
//! Every document kind (`nginx_stage.yml`, `ood_portal.yml`) is described by
//! a static [`schema::Schema`]. A [`Record`] built against a schema always
//! holds exactly the declared fields: construction fills in defaults, unknown
//! names are rejected, and nested sections such as the portal's `dex` block
//! are type-checked sub-records.
//!
//! Records round-trip through YAML via [`codec`], combine with [`merge()`], and
//! are read and written in place through the per-kind modules:
//!
//! ```no_run
//! use ondemand_config::ood_portal;
//!
//! ood_portal::edit("/etc/ood/config/ood_portal.yml", |portal| {
//!     portal.set("servername", "ondemand.example.org")?;
//!     portal.set("public_root", "/var/snap/ondemand/common/var/www/ood/public")
//! })?;
//! # Ok::<(), ondemand_config::ConfigError>(())
//! ```

pub mod codec;
pub mod dex;
mod editor;
mod error;
mod merge;
pub mod nginx_stage;
pub mod ood_portal;
mod record;
pub mod schema;
pub mod storage;

pub use editor::Editor;
pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use merge::{merge, merge_in_place, merge_reflected};
pub use record::{DOCUMENT_ROOT, FieldRef, FieldValue, Record};
