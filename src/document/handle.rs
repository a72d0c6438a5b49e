//! Document Handle
//!
//! A file path, the JSON document parsed from (or destined for) it, and the
//! flags deciding whether the pair is usable and whether it saves on close.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::io::{probe_create, read_document, write_document};
use crate::config::HandleConfig;
use crate::error::{HandleError, SaveError};

/// In-memory JSON document bound to a file.
///
/// A handle is either valid (its document was loaded, its path was
/// validated as creatable, or its seed document was saved) or invalid, in
/// which case saving does nothing. Validity is decided once, when the
/// handle is opened.
///
/// The save-on-exit flag is acted on by [`DocumentHandle::close`]; a handle
/// that is simply dropped never saves.
#[must_use = "call `close` so a handle opened with save_on_exit gets saved"]
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentHandle {
    path: PathBuf,
    document: Value,
    ok: bool,
    save_on_exit: bool,
}

impl DocumentHandle {
    fn empty(path: &Path, save_on_exit: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            document: Value::Null,
            ok: false,
            save_on_exit,
        }
    }

    /// Open `path` according to `config.policy`, failing with the reason
    /// the policy could not be satisfied.
    pub fn open<P: AsRef<Path>>(path: P, config: &HandleConfig) -> Result<Self, HandleError> {
        let mut handle = Self::empty(path.as_ref(), config.save_on_exit);
        handle.apply_policy(config)?;
        log::debug!("opened {} with {:?}", handle.path.display(), config.policy);
        Ok(handle)
    }

    /// Same as [`DocumentHandle::open`], but a failure only marks the
    /// returned handle invalid.
    pub fn open_lenient<P: AsRef<Path>>(path: P, config: &HandleConfig) -> Self {
        let mut handle = Self::empty(path.as_ref(), config.save_on_exit);
        if let Err(e) = handle.apply_policy(config) {
            log::debug!("{}", e);
            handle.ok = false;
        }
        handle
    }

    fn apply_policy(&mut self, config: &HandleConfig) -> Result<(), HandleError> {
        let policy = config.policy;

        if policy.loads() && !self.try_load() && !policy.creates() {
            return Err(HandleError::CannotOpen {
                path: self.path.clone(),
            });
        }

        if !self.ok && policy.creates() {
            probe_create(&self.path)?;
            self.ok = true;
            log::debug!("{} can be created", self.path.display());
        }

        Ok(())
    }

    /// Replace the document with the file's content if it can be read and
    /// parsed. Updates `ok` either way.
    fn try_load(&mut self) -> bool {
        match read_document(&self.path) {
            Ok(document) => {
                self.document = document;
                self.ok = true;
                log::debug!("loaded {}", self.path.display());
            }
            Err(e) => {
                self.ok = false;
                log::debug!("{} not loaded: {}", self.path.display(), e);
            }
        }
        self.ok
    }

    /// Load `path`, or adopt `default` and save it there. Saves on close.
    pub fn load_or_init<P: AsRef<Path>>(path: P, default: Value) -> Self {
        Self::load_or_init_with(path, default, true)
    }

    /// Load `path`, or adopt `default` and save it there.
    ///
    /// A missing or unparsable file is not an error; the handle is only
    /// invalid when the fallback document cannot be written.
    pub fn load_or_init_with<P: AsRef<Path>>(path: P, default: Value, save_on_exit: bool) -> Self {
        Self::load_or_init_else(path, save_on_exit, move || default)
    }

    /// Like [`DocumentHandle::load_or_init_with`], building the fallback
    /// document only when the file cannot be loaded.
    pub fn load_or_init_else<P, F>(path: P, save_on_exit: bool, default: F) -> Self
    where
        P: AsRef<Path>,
        F: FnOnce() -> Value,
    {
        let mut handle = Self::empty(path.as_ref(), save_on_exit);

        if !handle.try_load() {
            handle.document = default();
            // save() refuses to run on an invalid handle
            handle.ok = true;
            handle.ok = handle.save();
            log::debug!(
                "initialized {} from default (saved: {})",
                handle.path.display(),
                handle.ok
            );
        }

        handle
    }

    pub fn is_valid(&self) -> bool {
        self.ok
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_on_exit(&self) -> bool {
        self.save_on_exit
    }

    /// Write the document to the handle's path, replacing its content.
    ///
    /// Returns `false` if the handle is invalid or the write failed. A
    /// failed save leaves the handle's validity untouched.
    pub fn save(&self) -> bool {
        match self.try_save() {
            Ok(()) => true,
            Err(SaveError::Invalid) => false,
            Err(e) => {
                log::warn!("failed to save {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// [`DocumentHandle::save`] with the reason for a failure
    pub fn try_save(&self) -> Result<(), SaveError> {
        if !self.ok {
            return Err(SaveError::Invalid);
        }
        write_document(&self.path, &self.document)?;
        log::debug!("saved {}", self.path.display());
        Ok(())
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Mutable access to the document. Indexing a `Null` document by key
    /// turns it into an object, so `doc["key"] = value` declares the field.
    pub fn document_mut(&mut self) -> &mut Value {
        &mut self.document
    }

    /// Take the document out without saving
    pub fn into_document(self) -> Value {
        self.document
    }
}
