//! Note file loading (std only).

use std::fs;
use std::path::Path;

use crate::error::{message, Error, Result};

use super::{decode_notes, Note};

/// Read and decode a whole note file.
///
/// # Errors
///
/// Returns `Error::File` if the file cannot be opened or read, and
/// `NoteError::MisalignedLength` if its size is not a whole number of records.
pub fn load_notes<P: AsRef<Path>>(path: P) -> Result<Vec<Note>> {
    let bytes = fs::read(path.as_ref()).map_err(|e| Error::File(message(&e.to_string())))?;

    decode_notes(&bytes)
}
