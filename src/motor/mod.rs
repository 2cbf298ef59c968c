//! Motor module for stepper-singer.
//!
//! Provides the phase engine: winding tables, bounded travel state and the
//! pin driver that emits step pulses.

mod builder;
mod driver;
mod phase;
mod state;

pub use builder::StepperEngineBuilder;
pub use driver::StepperEngine;
pub use phase::{companion_for, winding_for, Direction, Winding, PHASE_COUNT};
pub use state::MotorState;
