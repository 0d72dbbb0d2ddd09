//! Last-result persistence.
//!
//! The state file holds nothing but the decimal text of one `f64`. This
//! module defines the errors and wires [`store::StateStore`] into
//! [`Calculator`] as `save_state` / `load_state`.

pub mod store;

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::Calculator;

pub use store::StateStore;

/// Errors while reading or writing the state file.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("state file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse state file {path}: {content:?} is not a number ({source})")]
    Parse {
        path: PathBuf,
        content: String,
        source: ParseFloatError,
    },
}

impl Calculator {
    /// Persist the last result to `path`, replacing any existing content.
    pub fn save_state(&self, path: impl AsRef<Path>) -> Result<(), StateError> {
        StateStore::new(path.as_ref()).save(self.last_result())
    }

    /// Replace the last result with the value stored at `path`.
    ///
    /// On error the current value is left untouched.
    pub fn load_state(&mut self, path: impl AsRef<Path>) -> Result<(), StateError> {
        let value = StateStore::new(path.as_ref()).load()?;
        self.set_last_result(value);
        Ok(())
    }
}
