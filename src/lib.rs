//! # stepper-singer
//!
//! Play notes on a bipolar stepper motor. Each note becomes a run of step
//! pulses at the note's frequency, so the motor's whine sounds the pitch.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: Uses `OutputPin` for the four windings and the
//!   H-bridge enable line, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Bounded travel**: The carriage never leaves `0..=max_position`;
//!   direction reverses at the bounds and ahead of notes that would overrun
//! - **Configuration-driven**: Pin roles, travel bound and timing calibration
//!   from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_singer::{load_notes, NotePlayer, PlayerConfig, StepperEngineBuilder};
//!
//! let config = PlayerConfig::default();
//! let notes = load_notes("song.bin")?;
//!
//! let engine = StepperEngineBuilder::new()
//!     .from_config(&config)
//!     .windings([a, b, c, d])
//!     .enable_pin(enable)
//!     .delay(delay)
//!     .build()?;
//!
//! let mut player = NotePlayer::from_config(engine, &config);
//! player.play_all(&notes)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables owned note lists for no_std with allocator
//! - `log`: Logs through the `log` facade
//! - `defmt`: Enables defmt logging for embedded targets
//! - `rpi`: Builds the `stepper-player` binary for Raspberry Pi

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to the other modules
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motor;
pub mod note;
pub mod sequencer;

// Re-exports for ergonomic API
pub use config::{validate_config, PlayerConfig, StepMode};
pub use error::{Error, Result};
pub use motor::{Direction, MotorState, StepperEngine, StepperEngineBuilder, Winding, PHASE_COUNT};
pub use note::{Note, NoteRecords, RECORD_SIZE};
pub use sequencer::{plan, NotePlayer, NoteTiming, PlannedNote, PlaybackReport};

// File loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;
#[cfg(feature = "std")]
pub use note::load_notes;
#[cfg(feature = "alloc")]
pub use note::{decode_notes, encode_notes};

// Unit types
pub use config::units::{Hertz, Micros};
