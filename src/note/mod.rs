//! Note module for stepper-singer.
//!
//! Provides the note data type and the fixed-width binary record format
//! note files are stored in.

mod codec;
#[cfg(feature = "std")]
mod loader;
mod record;

pub use codec::{NoteRecords, RECORD_SIZE};
#[cfg(feature = "alloc")]
pub use codec::{decode_notes, encode_notes};
#[cfg(feature = "std")]
pub use loader::load_notes;
pub use record::Note;
