//! Sequencer module for stepper-singer.
//!
//! Turns notes into step counts and pulse delays and drives the phase engine.

mod plan;
mod player;
mod timing;

pub use plan::{plan, PlannedNote, Planner};
pub use player::{NotePlayer, PlaybackReport};
pub use timing::NoteTiming;
