//! Scoped access: open a handle, hand its document to a closure, then close
//! it so the save-on-exit flag is honoured however the closure returns.

use std::path::Path;

use serde_json::Value;

use super::handle::DocumentHandle;
use crate::config::HandleConfig;
use crate::error::HandleError;

impl DocumentHandle {
    /// End the handle's scope, saving first if it was opened with
    /// save-on-exit. Returns the save result, or `true` when no save was due.
    pub fn close(self) -> bool {
        if !self.save_on_exit() {
            return true;
        }
        let saved = self.save();
        if !saved {
            log::debug!("save on close skipped for {}", self.path().display());
        }
        saved
    }
}

/// Open `path` strictly, run `f` on its document, then close the handle.
///
/// The close result is logged but not returned; a closure that needs to
/// know should call [`DocumentHandle::save`] itself.
pub fn with_document<P, F, R>(path: P, config: &HandleConfig, f: F) -> Result<R, HandleError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Value) -> R,
{
    let mut handle = DocumentHandle::open(path, config)?;
    let result = f(handle.document_mut());
    let _ = handle.close();
    Ok(result)
}

/// [`with_document`] over [`DocumentHandle::load_or_init`].
///
/// `f` also receives whether the handle is valid, since load-or-init never
/// fails outright.
pub fn with_document_or_init<P, F, R>(path: P, default: Value, f: F) -> R
where
    P: AsRef<Path>,
    F: FnOnce(&mut Value, bool) -> R,
{
    let mut handle = DocumentHandle::load_or_init(path, default);
    let valid = handle.is_valid();
    let result = f(handle.document_mut(), valid);
    let _ = handle.close();
    result
}
