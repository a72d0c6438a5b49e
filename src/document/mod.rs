//! Document Handle
//!
//! File-backed JSON documents with open policies and scoped saving.

pub mod handle;
pub mod io;
pub mod scope;

pub use handle::DocumentHandle;
pub use scope::{with_document, with_document_or_init};
