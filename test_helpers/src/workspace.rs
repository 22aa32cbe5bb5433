//! Scratch directories for tests that read and write documents.
//!
//! # Examples
//!
//! ```
//! use test_helpers::workspace::TempWorkspace;
//!
//! let workspace = TempWorkspace::new()?;
//! let path = workspace.write("nginx_stage.yml", "min_uid: 1000\n")?;
//! assert_eq!(workspace.read("nginx_stage.yml")?, "min_uid: 1000\n");
//! assert!(path.starts_with(workspace.root()));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory removed when dropped.
#[must_use = "dropping the workspace deletes its directory"]
pub struct TempWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempWorkspace {
    /// Create an empty workspace under the system temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary workspace")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("workspace path is not valid UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Root directory of the workspace.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of `name` inside the workspace; the file need not exist.
    #[must_use]
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name`, returning its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Read `name` back as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        std::fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }
}
