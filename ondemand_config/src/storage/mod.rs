//! Filesystem primitives for configuration documents.
//!
//! Files are reached through a `cap-std` handle on their parent directory,
//! opened with ambient authority. Relative paths resolve against the working
//! directory.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use tracing::{debug, error, warn};

use crate::error::{ConfigError, ConfigResult, ErrorKind};

/// Read the document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when the file or its parent directory is
/// missing (logged at error level first) and [`ConfigError::Io`] for any
/// other read failure.
pub fn read(path: &Utf8Path) -> ConfigResult<String> {
    let contents = open_parent_dir_and_name(path)
        .and_then(|(dir, name)| dir.read_to_string(name))
        .map_err(|err| ConfigError::io(path, err));
    match contents {
        Ok(text) => {
            debug!(path = %path, bytes = text.len(), "read configuration document");
            Ok(text)
        }
        Err(err) => {
            if err.kind() == ErrorKind::NotFound {
                error!(path = %path, "unable to locate configuration document");
            }
            Err(err)
        }
    }
}

/// Write `contents` to `path`, replacing any existing document.
///
/// Replacing an existing file is not an error; it is reported as a warning.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when the parent directory is missing and
/// [`ConfigError::Io`] for any other write failure.
pub fn write(path: &Utf8Path, contents: &str) -> ConfigResult<()> {
    let (dir, name) = open_parent_dir_and_name(path).map_err(|err| ConfigError::io(path, err))?;
    if dir.exists(&name) {
        warn!(path = %path, "overwriting existing configuration document");
    }
    debug!(path = %path, bytes = contents.len(), "writing configuration document");
    dir.write(&name, contents)
        .map_err(|err| ConfigError::io(path, err))
}

/// Whether a regular file exists at `path`.
#[must_use]
pub fn exists(path: &Utf8Path) -> bool {
    open_parent_dir_and_name(path).is_ok_and(|(dir, name)| dir.is_file(name))
}

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

fn open_parent_dir_and_name(path: &Utf8Path) -> std::io::Result<(Dir, String)> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "configuration document path has no file name",
        )
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    Ok((dir, file_name.to_owned()))
}

#[cfg(test)]
mod tests;
