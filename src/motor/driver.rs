//! Stepper phase engine.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Micros;
use crate::config::StepMode;
use crate::error::{MotorError, Result};

use super::phase::companion_for;
use super::state::MotorState;

/// Four-winding stepper behind an H-bridge.
///
/// Generic over:
/// - `PIN`: winding pin type (must implement `OutputPin`)
/// - `EN`: H-bridge enable pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepperEngine<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Winding pins in role order A, B, C, D.
    windings: [PIN; 4],

    /// H-bridge enable line.
    enable_pin: EN,

    /// Sleep primitive for pulse holds and pauses.
    delay: DELAY,

    /// Position, phase and direction.
    state: MotorState,

    /// Winding excitation pattern.
    step_mode: StepMode,
}

impl<PIN, EN, DELAY> StepperEngine<PIN, EN, DELAY>
where
    PIN: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        windings: [PIN; 4],
        enable_pin: EN,
        delay: DELAY,
        state: MotorState,
        step_mode: StepMode,
    ) -> Self {
        Self {
            windings,
            enable_pin,
            delay,
            state,
            step_mode,
        }
    }

    /// Get the motor state.
    #[inline]
    pub fn state(&self) -> &MotorState {
        &self.state
    }

    /// Get the step mode.
    #[inline]
    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Drive the H-bridge enable line high.
    pub fn enable(&mut self) -> Result<()> {
        self.enable_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.state.set_enabled(true);
        Ok(())
    }

    /// Drive every winding low, then the enable line.
    ///
    /// Every pin is attempted even if an earlier one fails; the first
    /// failure is reported.
    pub fn disable(&mut self) -> Result<()> {
        let mut result: Result<()> = Ok(());

        for pin in self.windings.iter_mut() {
            if pin.set_low().is_err() {
                result = Err(MotorError::PinError.into());
            }
        }

        if self.enable_pin.set_low().is_err() {
            result = Err(MotorError::PinError.into());
        } else {
            self.state.set_enabled(false);
        }

        result
    }

    /// Block for `duration` with the motor in whatever state it is in.
    pub fn pause(&mut self, duration: Micros) {
        if !duration.is_zero() {
            self.delay.delay_us(duration.value());
        }
    }

    /// Emit one step pulse held for `hold`, then advance position and phase.
    ///
    /// A step taken on a travel bound still pulses; the direction reverses
    /// so the following step moves away from the bound.
    pub fn step(&mut self, hold: Micros) -> Result<()> {
        match self.step_mode {
            StepMode::Wave => self.wave_pulse(hold)?,
            StepMode::HalfStep => self.half_step_pulse(hold)?,
        }

        self.state.advance();
        Ok(())
    }

    /// Reverse before a run of `steps` if it would overrun the bound ahead.
    ///
    /// Returns `true` if the direction changed.
    pub fn orient_for(&mut self, steps: u64) -> bool {
        let flipped = self.state.orient_for(steps);
        if flipped {
            trace!(
                "reversing at {} for {} steps, now heading {}",
                self.state.position(),
                steps,
                self.state.direction().sign()
            );
        }
        flipped
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> ([PIN; 4], EN, DELAY) {
        (self.windings, self.enable_pin, self.delay)
    }

    fn wave_pulse(&mut self, hold: Micros) -> Result<()> {
        let pin = &mut self.windings[self.state.winding().index()];

        pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(hold.value());
        pin.set_low().map_err(|_| MotorError::PinError)?;

        Ok(())
    }

    fn half_step_pulse(&mut self, hold: Micros) -> Result<()> {
        let primary = self.state.winding().index();
        let companion = companion_for(self.state.heading(), self.state.phase()).index();
        let first = hold.half();

        self.windings[primary].set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(first.value());
        self.windings[companion].set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(hold.value() - first.value());
        self.windings[primary].set_low().map_err(|_| MotorError::PinError)?;
        self.windings[companion].set_low().map_err(|_| MotorError::PinError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::{Direction, StepperEngineBuilder};
    use core::convert::Infallible;

    #[derive(Default)]
    struct LevelPin(bool);

    impl embedded_hal::digital::ErrorType for LevelPin {
        type Error = Infallible;
    }

    impl OutputPin for LevelPin {
        fn set_high(&mut self) -> core::result::Result<(), Infallible> {
            self.0 = true;
            Ok(())
        }

        fn set_low(&mut self) -> core::result::Result<(), Infallible> {
            self.0 = false;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn engine(max_position: u32) -> StepperEngine<LevelPin, LevelPin, NoDelay> {
        StepperEngineBuilder::new()
            .windings([LevelPin::default(), LevelPin::default(), LevelPin::default(), LevelPin::default()])
            .enable_pin(LevelPin::default())
            .delay(NoDelay)
            .max_position(max_position)
            .build()
            .unwrap()
    }

    #[test]
    fn test_enable_disable() {
        let mut engine = engine(10);
        engine.enable().unwrap();
        assert!(engine.state().is_enabled());

        engine.step(Micros(5)).unwrap();
        engine.disable().unwrap();
        assert!(!engine.state().is_enabled());

        let (windings, enable, _) = engine.release();
        assert!(windings.iter().all(|p| !p.0));
        assert!(!enable.0);
    }

    #[test]
    fn test_step_leaves_windings_low() {
        let mut engine = engine(10);
        for _ in 0..6 {
            engine.step(Micros(1)).unwrap();
        }
        assert_eq!(engine.state().position(), 6);
        assert_eq!(engine.state().phase(), 2);

        let (windings, _, _) = engine.release();
        assert!(windings.iter().all(|p| !p.0));
    }

    #[test]
    fn test_orient_for() {
        let mut engine = engine(10);
        assert!(!engine.orient_for(10));
        assert!(engine.orient_for(11));
        assert_eq!(engine.state().direction(), Direction::Backward);
    }
}
