//! File primitives behind the handle: read, write, and the create probe.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{HandleError, LoadError, SaveError};

const INDENT: &[u8] = b"    ";

/// Open and parse the document at `path`
pub fn read_document(path: &Path) -> Result<Value, LoadError> {
    let file = File::open(path).map_err(LoadError::Open)?;
    serde_json::from_reader(BufReader::new(file)).map_err(LoadError::Parse)
}

/// Render a document the way it is stored: 4-space indent, trailing newline
pub fn render_document(document: &Value) -> Result<Vec<u8>, SaveError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut ser)
        .map_err(SaveError::Serialize)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Replace the file at `path` with the rendered document.
///
/// Not atomic: the file is truncated before the new content is written.
pub fn write_document(path: &Path, document: &Value) -> Result<(), SaveError> {
    let bytes = render_document(document)?;

    let mut file = File::create(path).map_err(SaveError::Open)?;
    file.write_all(&bytes).map_err(SaveError::Write)?;
    file.flush().map_err(SaveError::Write)?;
    Ok(())
}

/// Check that `path` is free and creatable, leaving nothing behind
pub fn probe_create(path: &Path) -> Result<(), HandleError> {
    if path.exists() {
        return Err(HandleError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => drop(file),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(HandleError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(HandleError::NoUsablePolicy {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    fs::remove_file(path).map_err(|source| HandleError::ProbeCleanup {
        path: path.to_path_buf(),
        source,
    })
}
