//! Per-note step count and pulse delay.

use crate::config::units::{Micros, MICROS_PER_SEC};
use crate::note::Note;

/// Step count and pulse hold for one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTiming {
    /// Whole steps in the note's duration.
    pub steps: u64,
    /// Hold per step after subtracting the overhead calibration.
    pub delay: Micros,
    /// Set when the overhead exceeded the pulse period and the delay was
    /// clamped to zero; such a note plays sharp.
    pub clamped: bool,
}

impl NoteTiming {
    /// Compute timing for `note`.
    ///
    /// `steps = duration * frequency / 1e6` and
    /// `delay = 1e6 / frequency - overhead`, both rounded down.
    ///
    /// Returns `None` for a zero-frequency note.
    pub fn compute(note: &Note, overhead: Micros) -> Option<Self> {
        if !note.is_playable() {
            return None;
        }

        let period = Micros(MICROS_PER_SEC / note.frequency.value());
        let clamped = period < overhead;

        Some(Self {
            steps: note.steps(),
            delay: Micros(period.value().saturating_sub(overhead.value())),
            clamped,
        })
    }
}
