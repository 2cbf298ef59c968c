//! Note playback.

use core::borrow::Borrow;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Micros;
use crate::config::PlayerConfig;
use crate::error::{Error, NoteError, Result};
use crate::motor::StepperEngine;
use crate::note::Note;

use super::timing::NoteTiming;

/// Outcome of a playback run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Notes that were sounded (including ones too short for a single step).
    pub played: usize,
    /// Notes rejected as unplayable.
    pub skipped: usize,
    /// Physical steps taken across all notes.
    pub steps: u64,
}

/// Plays note sequences on a [`StepperEngine`].
pub struct NotePlayer<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    engine: StepperEngine<PIN, EN, DELAY>,
    overhead: Micros,
}

impl<PIN, EN, DELAY> NotePlayer<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a player that subtracts `overhead` from every pulse delay.
    pub fn new(engine: StepperEngine<PIN, EN, DELAY>, overhead: Micros) -> Self {
        Self { engine, overhead }
    }

    /// Create a player using the overhead calibration from `config`.
    pub fn from_config(engine: StepperEngine<PIN, EN, DELAY>, config: &PlayerConfig) -> Self {
        Self::new(engine, config.overhead)
    }

    /// Get the engine.
    #[inline]
    pub fn engine(&self) -> &StepperEngine<PIN, EN, DELAY> {
        &self.engine
    }

    /// Get the overhead calibration.
    #[inline]
    pub fn overhead(&self) -> Micros {
        self.overhead
    }

    /// Give the engine back.
    pub fn into_engine(self) -> StepperEngine<PIN, EN, DELAY> {
        self.engine
    }

    /// Play every note in order.
    ///
    /// Zero-frequency notes are skipped after their pause, with the motor
    /// left disabled. The motor always ends with all windings low and the
    /// bridge disabled, also when a pin write fails part way.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a pin write fails.
    pub fn play_all<I>(&mut self, notes: I) -> Result<PlaybackReport>
    where
        I: IntoIterator,
        I::Item: Borrow<Note>,
    {
        let mut report = PlaybackReport::default();

        for (index, note) in notes.into_iter().enumerate() {
            match self.play_note(index, note.borrow()) {
                Ok(steps) => {
                    report.played += 1;
                    report.steps += steps;
                }
                Err(Error::Note(NoteError::ZeroFrequency { .. })) => {
                    warn!("skipping note {}: zero frequency", index);
                    report.skipped += 1;
                }
                Err(e) => {
                    let _ = self.engine.disable();
                    return Err(e);
                }
            }
        }

        self.engine.disable()?;

        info!(
            "played {} notes, skipped {}, {} steps",
            report.played,
            report.skipped,
            report.steps
        );
        Ok(report)
    }

    /// Play one note and return the number of steps taken.
    ///
    /// `index` only labels the error for a zero-frequency note.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::ZeroFrequency` for an unplayable note (after its
    /// pause, with the motor disabled), or `MotorError::PinError`.
    pub fn play_note(&mut self, index: usize, note: &Note) -> Result<u64> {
        self.engine.disable()?;
        self.engine.pause(note.pause);

        let timing = NoteTiming::compute(note, self.overhead)
            .ok_or(NoteError::ZeroFrequency { index })?;

        self.engine.enable()?;

        if timing.clamped {
            debug!(
                "note {}: {} Hz is faster than the {} us overhead, delay clamped to 0",
                index,
                note.frequency.value(),
                self.overhead.value()
            );
        }

        self.engine.orient_for(timing.steps);

        trace!(
            "note {}: {} steps of {} us from {}",
            index,
            timing.steps,
            timing.delay.value(),
            self.engine.state().position()
        );

        for _ in 0..timing.steps {
            self.engine.step(timing.delay)?;
        }

        Ok(timing.steps)
    }
}
