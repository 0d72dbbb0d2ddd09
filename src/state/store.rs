//! Filesystem-backed state store.
//!
//! Values are written with Rust's shortest round-trip float formatting
//! (`8.0`, `0.1`, `NaN`, `inf`) so every value reads back exactly.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::StateError;

/// State store bound to one file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store for `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value.
    ///
    /// Only a file that is genuinely absent maps to [`StateError::NotFound`];
    /// any other I/O failure (permissions, a non-directory parent) is a
    /// [`StateError::Read`].
    pub fn load(&self) -> Result<f64, StateError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StateError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(StateError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let value = parse_value(&self.path, &content)?;
        debug!(path = %self.path.display(), value, "loaded state");
        Ok(value)
    }

    /// Overwrite the stored value.
    pub fn save(&self, value: f64) -> Result<(), StateError> {
        let content = format_value(value);
        std::fs::write(&self.path, &content).map_err(|e| StateError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        debug!(path = %self.path.display(), %content, "saved state");
        Ok(())
    }

    /// Delete the state file. Returns `false` when there was nothing to delete.
    pub fn remove(&self) -> Result<bool, StateError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed state file");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StateError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

/// Render a value in the on-disk text format.
fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// Parse the on-disk text format. Surrounding whitespace is ignored.
fn parse_value(path: &Path, content: &str) -> Result<f64, StateError> {
    content.trim().parse::<f64>().map_err(|e| StateError::Parse {
        path: path.to_path_buf(),
        content: content.to_string(),
        source: e,
    })
}
