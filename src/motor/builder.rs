//! Builder pattern for StepperEngine.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{PlayerConfig, StepMode};
use crate::error::{ConfigError, Error, Result};

use super::driver::StepperEngine;
use super::phase::Direction;
use super::state::MotorState;

/// Builder for creating StepperEngine instances.
pub struct StepperEngineBuilder<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    windings: Option<[PIN; 4]>,
    enable_pin: Option<EN>,
    delay: Option<DELAY>,
    max_position: u32,
    step_mode: StepMode,
    start: Option<(u32, u8, Direction)>,
}

impl<PIN, EN, DELAY> Default for StepperEngineBuilder<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PIN, EN, DELAY> StepperEngineBuilder<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder with the default travel bound and step mode.
    pub fn new() -> Self {
        let defaults = PlayerConfig::default();
        Self {
            windings: None,
            enable_pin: None,
            delay: None,
            max_position: defaults.max_position,
            step_mode: defaults.step_mode,
            start: None,
        }
    }

    /// Set the winding pins in role order A, B, C, D.
    pub fn windings(mut self, pins: [PIN; 4]) -> Self {
        self.windings = Some(pins);
        self
    }

    /// Set the H-bridge enable pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the upper travel bound in steps.
    pub fn max_position(mut self, steps: u32) -> Self {
        self.max_position = steps;
        self
    }

    /// Set the step mode.
    pub fn step_mode(mut self, mode: StepMode) -> Self {
        self.step_mode = mode;
        self
    }

    /// Start somewhere other than position 0, phase 0, forward.
    ///
    /// Useful when the carriage position is known from a previous run.
    pub fn start_at(mut self, position: u32, phase: u8, direction: Direction) -> Self {
        self.start = Some((position, phase, direction));
        self
    }

    /// Configure from a PlayerConfig.
    ///
    /// Pin numbers are not used here; the caller maps them to pin instances.
    pub fn from_config(mut self, config: &PlayerConfig) -> Self {
        self.max_position = config.max_position;
        self.step_mode = config.step_mode;
        self
    }

    /// Build the StepperEngine.
    ///
    /// # Errors
    ///
    /// Returns an error if pins or delay are missing, or the start state is
    /// outside the travel range.
    pub fn build(self) -> Result<StepperEngine<PIN, EN, DELAY>> {
        let windings = self
            .windings
            .ok_or(Error::Config(ConfigError::MissingField("windings")))?;

        let enable_pin = self
            .enable_pin
            .ok_or(Error::Config(ConfigError::MissingField("enable_pin")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        let state = match self.start {
            Some((position, phase, direction)) => {
                MotorState::starting_at(self.max_position, position, phase, direction)?
            }
            None => MotorState::new(self.max_position)?,
        };

        Ok(StepperEngine::new(
            windings,
            enable_pin,
            delay,
            state,
            self.step_mode,
        ))
    }
}
