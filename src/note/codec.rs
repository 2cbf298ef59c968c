//! Binary note record format.
//!
//! A note file is a flat run of 12-byte records with no header. Each record
//! holds three little-endian `u32` words: pause (µs), frequency (Hz) and
//! duration (µs).

use crate::error::{NoteError, Result};

use super::Note;

/// Size of one encoded note in bytes.
pub const RECORD_SIZE: usize = 12;

/// Zero-copy iterator over the notes of an encoded buffer.
///
/// The buffer length is checked up front, so a trailing partial record is
/// never silently dropped.
#[derive(Debug, Clone)]
pub struct NoteRecords<'a> {
    chunks: core::slice::ChunksExact<'a, u8>,
}

impl<'a> NoteRecords<'a> {
    /// Wrap an encoded buffer.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::MisalignedLength` if `bytes` is not a whole number
    /// of records.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() % RECORD_SIZE != 0 {
            return Err(NoteError::MisalignedLength { len: bytes.len() }.into());
        }

        Ok(Self {
            chunks: bytes.chunks_exact(RECORD_SIZE),
        })
    }
}

impl Iterator for NoteRecords<'_> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        self.chunks.next().map(decode_record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for NoteRecords<'_> {}

fn decode_record(record: &[u8]) -> Note {
    let word = |i: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&record[i * 4..i * 4 + 4]);
        u32::from_le_bytes(buf)
    };

    Note::new(word(0), word(1), word(2))
}

impl Note {
    /// Encode as one binary record.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.pause.value().to_le_bytes());
        out[4..8].copy_from_slice(&self.frequency.value().to_le_bytes());
        out[8..12].copy_from_slice(&self.duration.value().to_le_bytes());
        out
    }
}

/// Decode a whole buffer into an owned note list.
///
/// # Errors
///
/// Returns `NoteError::MisalignedLength` on a trailing partial record.
#[cfg(feature = "alloc")]
pub fn decode_notes(bytes: &[u8]) -> Result<alloc::vec::Vec<Note>> {
    Ok(NoteRecords::new(bytes)?.collect())
}

/// Encode notes in file order.
#[cfg(feature = "alloc")]
pub fn encode_notes(notes: &[Note]) -> alloc::vec::Vec<u8> {
    notes.iter().flat_map(Note::to_bytes).collect()
}
