//! Typed error boundary. Per spec.md section 7, these never leave the
//! public API: `Checker` catches them and folds them into a single `H000`
//! diagnostic, the way the original's bare `except Exception` did, but
//! without a stringly-typed catch-all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    pub fn path(&self) -> &PathBuf {
        match self {
            CheckError::Io { path, .. } => path,
        }
    }
}
