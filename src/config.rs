//! Configuration for opening a document handle.
//!
//! Handles:
//! - Which open policy applies (load, create, or load-or-create)
//! - Whether the handle saves itself when its scope ends
//! - Locating a per-user config file

use std::path::PathBuf;

/// How a handle treats its backing file when it is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The file must exist and parse
    LoadExisting,
    /// The file must not exist, and must be creatable. Nothing is written.
    CreateOnly,
    /// Load the file if it parses, otherwise fall back to `CreateOnly`
    LoadOrCreate,
}

impl Policy {
    /// Whether this policy tries to read the file first
    pub fn loads(self) -> bool {
        matches!(self, Policy::LoadExisting | Policy::LoadOrCreate)
    }

    /// Whether this policy may validate a fresh file
    pub fn creates(self) -> bool {
        matches!(self, Policy::CreateOnly | Policy::LoadOrCreate)
    }
}

/// Options a handle is opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleConfig {
    pub policy: Policy,
    /// Save when the handle is closed
    pub save_on_exit: bool,
}

impl HandleConfig {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            save_on_exit: false,
        }
    }

    pub fn save_on_exit(mut self, save_on_exit: bool) -> Self {
        self.save_on_exit = save_on_exit;
        self
    }
}

impl From<Policy> for HandleConfig {
    fn from(policy: Policy) -> Self {
        Self::new(policy)
    }
}

/// Path of `file_name` inside the per-user config directory for `app`.
///
/// Returns `None` when the platform has no config directory. Nothing is
/// created on disk.
pub fn user_config_path(app: &str, file_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(app).join(file_name))
}

/// Library version as `MAJOR.MINOR`, with `.PATCH` only when it is non-zero
pub fn version_string() -> String {
    let major = env!("CARGO_PKG_VERSION_MAJOR");
    let minor = env!("CARGO_PKG_VERSION_MINOR");
    let patch = env!("CARGO_PKG_VERSION_PATCH");

    if patch == "0" {
        format!("{}.{}", major, minor)
    } else {
        format!("{}.{}.{}", major, minor, patch)
    }
}
