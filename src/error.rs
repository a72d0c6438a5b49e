use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a strict open can fail
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("file \"{path}\" cannot be opened")]
    CannotOpen { path: PathBuf },

    #[error("cannot delete temporary validation file \"{path}\": {source}")]
    ProbeCleanup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file \"{path}\" exists but should not")]
    AlreadyExists { path: PathBuf },

    #[error("must specify a load or create policy: \"{path}\" could not be created: {source}")]
    NoUsablePolicy {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HandleError {
    /// The path the failed open was for
    pub fn path(&self) -> &Path {
        match self {
            HandleError::CannotOpen { path }
            | HandleError::ProbeCleanup { path, .. }
            | HandleError::AlreadyExists { path }
            | HandleError::NoUsablePolicy { path, .. } => path.as_path(),
        }
    }
}

/// Why a file could not be loaded. Callers treat every variant the same.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open: {0}")]
    Open(#[source] std::io::Error),

    #[error("cannot parse: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Why a save did not happen
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("handle is not valid")]
    Invalid,

    #[error("cannot open for writing: {0}")]
    Open(#[source] std::io::Error),

    #[error("cannot serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}
