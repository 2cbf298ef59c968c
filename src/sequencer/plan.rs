//! Dry-run planning.
//!
//! Walks a note sequence through a detached [`MotorState`] exactly as the
//! player would, without touching any pins. Useful for previewing a file
//! and for checking travel behaviour off the target.

use core::borrow::Borrow;

use crate::config::units::Micros;
use crate::config::PlayerConfig;
use crate::error::{NoteError, Result};
use crate::motor::{Direction, MotorState};
use crate::note::Note;

use super::timing::NoteTiming;

/// What the player will do for one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedNote {
    /// Position of the note in the sequence.
    pub index: usize,
    /// Silence before the note.
    pub pause: Micros,
    /// Step count and pulse hold.
    pub timing: NoteTiming,
    /// Direction the note starts in, after lookahead correction.
    pub direction: Direction,
    /// Travel position before the first step.
    pub start_position: u32,
    /// Travel position after the last step.
    pub end_position: u32,
}

/// Iterator over planned notes; zero-frequency notes come out as errors.
#[derive(Debug, Clone)]
pub struct Planner<I> {
    notes: I,
    index: usize,
    state: MotorState,
    overhead: Micros,
}

/// Plan `notes` from the startup state described by `config`.
///
/// # Errors
///
/// Returns an error if `config` has no travel range.
pub fn plan<I>(notes: I, config: &PlayerConfig) -> Result<Planner<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Borrow<Note>,
{
    Ok(Planner {
        notes: notes.into_iter(),
        index: 0,
        state: MotorState::new(config.max_position)?,
        overhead: config.overhead,
    })
}

impl<I> Planner<I> {
    /// Motor state after the notes planned so far.
    pub fn state(&self) -> &MotorState {
        &self.state
    }
}

impl<I> Iterator for Planner<I>
where
    I: Iterator,
    I::Item: Borrow<Note>,
{
    type Item = core::result::Result<PlannedNote, NoteError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.notes.next()?;
        let note = item.borrow();
        let index = self.index;
        self.index += 1;

        let Some(timing) = NoteTiming::compute(note, self.overhead) else {
            return Some(Err(NoteError::ZeroFrequency { index }));
        };

        self.state.orient_for(timing.steps);
        let direction = self.state.direction();
        let start_position = self.state.position();

        for _ in 0..timing.steps {
            self.state.advance();
        }

        Some(Ok(PlannedNote {
            index,
            pause: note.pause,
            timing,
            direction,
            start_position,
            end_position: self.state.position(),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.notes.size_hint()
    }
}
