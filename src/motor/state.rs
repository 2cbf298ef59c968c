//! Motor phase and travel state.
//!
//! The state is only ever mutated through [`StepperEngine`](super::StepperEngine)
//! (or a detached copy during planning), so the travel bound holds at every
//! observation point.

use crate::error::{ConfigError, Error, MotorError, Result};

use super::phase::{winding_for, Direction, Winding, PHASE_COUNT};

/// Position, phase and direction of the motor.
///
/// Invariants:
/// - `0 <= position <= max_position`
/// - `phase < 4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorState {
    position: u32,
    max_position: u32,
    phase: u8,
    direction: Direction,
    enabled: bool,
}

impl MotorState {
    /// Create the startup state: position 0, phase 0, moving forward, bridge off.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMaxPosition` if `max_position` is 0.
    pub fn new(max_position: u32) -> Result<Self> {
        Self::starting_at(max_position, 0, 0, Direction::Forward)
    }

    /// Create a state at an arbitrary point of the travel range.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_position` is 0, `position` exceeds it or
    /// `phase` is not a valid phase index.
    pub fn starting_at(
        max_position: u32,
        position: u32,
        phase: u8,
        direction: Direction,
    ) -> Result<Self> {
        if max_position == 0 {
            return Err(Error::Config(ConfigError::InvalidMaxPosition(max_position)));
        }
        if position > max_position || phase >= PHASE_COUNT {
            return Err(Error::Motor(MotorError::InvalidState { position, phase }));
        }

        Ok(Self {
            position,
            max_position,
            phase,
            direction,
            enabled: false,
        })
    }

    /// Current travel position in steps.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Upper travel bound.
    #[inline]
    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    /// Current phase index.
    #[inline]
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Current travel direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the H-bridge is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Winding for the current phase.
    #[inline]
    pub fn winding(&self) -> Winding {
        winding_for(self.phase)
    }

    /// Direction the next step will actually take.
    ///
    /// Differs from [`direction`](Self::direction) only when the motor sits
    /// on the bound it is heading for.
    pub fn heading(&self) -> Direction {
        match self.direction {
            Direction::Backward if self.position == 0 => Direction::Forward,
            Direction::Forward if self.position >= self.max_position => Direction::Backward,
            direction => direction,
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Account for one physical step.
    ///
    /// The bound check runs before the position moves: a step taken on a
    /// bound reverses the direction and moves away from it.
    pub(crate) fn advance(&mut self) {
        self.direction = self.heading();

        self.position = match self.direction {
            Direction::Forward => self.position + 1,
            Direction::Backward => self.position - 1,
        };

        self.phase = match self.direction {
            Direction::Backward if self.phase == 0 => PHASE_COUNT - 1,
            Direction::Forward if self.phase >= PHASE_COUNT - 1 => 0,
            Direction::Forward => self.phase + 1,
            Direction::Backward => self.phase - 1,
        };
    }

    /// Reverse up front if a run of `steps` would overrun the bound ahead.
    ///
    /// Returns `true` if the direction changed.
    pub(crate) fn orient_for(&mut self, steps: u64) -> bool {
        let position = u64::from(self.position);
        let overruns = match self.direction {
            Direction::Backward => position < steps,
            Direction::Forward => position + steps > u64::from(self.max_position),
        };

        if overruns {
            self.direction = self.direction.reversed();
        }
        overruns
    }
}
