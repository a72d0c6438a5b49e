//! JSON Config Handle
//!
//! Binds an in-memory JSON document to a file on disk.
//!
//! This library provides:
//! - Load / create / load-or-create open policies
//! - Load-or-initialize with a seed document
//! - Pretty-printed saves, on demand or when the handle's scope ends
//! - Strict (error-returning) and best-effort (status flag) constructors

pub mod config;
pub mod document;
pub mod error;

pub use config::{HandleConfig, Policy, user_config_path, version_string};
pub use document::{DocumentHandle, with_document, with_document_or_init};
pub use error::{HandleError, LoadError, SaveError};

/// Re-exported so callers can build documents without naming serde_json.
pub use serde_json::{Value, json};
