//! Load, save and in-place editing of one kind of configuration document.
//!
//! An [`Editor`] binds the generic codec and storage functions to a single
//! schema. The per-kind modules ([`crate::nginx_stage`],
//! [`crate::ood_portal`]) expose one as `EDITOR` and wrap it in free
//! functions.

use camino::Utf8Path;
use serde_json::{Map, Value};
use tracing::debug;

use crate::codec;
use crate::error::{ConfigError, ConfigResult};
use crate::record::Record;
use crate::schema::Schema;
use crate::storage;

/// Document operations for records of one schema.
#[derive(Clone, Copy, Debug)]
pub struct Editor {
    schema: &'static Schema,
}

impl Editor {
    /// Bind an editor to `schema`.
    #[must_use]
    pub const fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    /// The schema this editor reads and writes.
    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// A record with every field at its default.
    #[must_use]
    pub fn create(&self) -> Record {
        Record::new(self.schema)
    }

    /// A record built from a partial mapping.
    ///
    /// # Errors
    ///
    /// See [`Record::from_mapping`].
    pub fn from_mapping(&self, partial: Map<String, Value>) -> ConfigResult<Record> {
        Record::from_mapping(self.schema, partial)
    }

    /// Load the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `path` does not exist, and any
    /// read, parse or schema error.
    pub fn load(&self, path: &Utf8Path) -> ConfigResult<Record> {
        let text = storage::read(path)?;
        debug!(path = %path, model = self.schema.name(), "parsing configuration document");
        self.loads(&text)
    }

    /// Parse a document held in memory.
    ///
    /// # Errors
    ///
    /// See [`codec::from_document`].
    pub fn loads(&self, text: &str) -> ConfigResult<Record> {
        codec::from_document(self.schema, text)
    }

    /// Write `record` to `path`, overwriting any existing document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaMismatch`] when `record` belongs to
    /// another schema, and any emit or write error.
    pub fn dump(&self, record: &Record, path: &Utf8Path) -> ConfigResult<()> {
        let text = self.dumps(record)?;
        storage::write(path, &text)
    }

    /// Render `record` as a document string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaMismatch`] when `record` belongs to
    /// another schema, and any emit error.
    pub fn dumps(&self, record: &Record) -> ConfigResult<String> {
        self.ensure_kind(record)?;
        codec::to_document(record)
    }

    /// Load the document at `path` (or start from defaults when it does not
    /// exist), hand it to `f`, then write it back.
    ///
    /// The document is written whenever `f` succeeds, changed or not. When
    /// `f` fails nothing is written and its error is returned.
    ///
    /// # Errors
    ///
    /// Returns the error of `f`, or any load or dump error converted into
    /// `E`.
    pub fn edit<T, E, F>(&self, path: &Utf8Path, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Record) -> Result<T, E>,
        E: From<ConfigError>,
    {
        let mut record = if storage::exists(path) {
            self.load(path)?
        } else {
            debug!(path = %path, model = self.schema.name(), "no document yet; editing defaults");
            self.create()
        };
        let outcome = f(&mut record)?;
        self.dump(&record, path)?;
        Ok(outcome)
    }

    fn ensure_kind(&self, record: &Record) -> ConfigResult<()> {
        if record.schema().same_as(self.schema) {
            Ok(())
        } else {
            Err(ConfigError::schema_mismatch(self.schema, record.schema()))
        }
    }
}
