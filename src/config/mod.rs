//! Configuration module for stepper-singer.
//!
//! Provides the player configuration (pin roles, travel bound, timing
//! calibration, step mode), loadable from TOML files with the `std` feature.

mod pins;
mod player;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use pins::{PinMap, MAX_GPIO};
pub use player::{PlayerConfig, StepMode};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Hertz, Micros};
