//! Scaffolder error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scaffolding error. Nothing is rolled back when one is returned.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid service name {0:?}")]
    InvalidServiceName(String),
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Workspace manifest could not be updated. Reported as a warning only.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
