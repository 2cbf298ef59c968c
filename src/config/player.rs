//! Player configuration - root configuration structure.

use serde::Deserialize;

use super::pins::PinMap;
use super::units::Micros;

/// How a single step energizes the windings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// One winding energized at a time for the whole pulse.
    #[default]
    Wave,
    /// Current winding alone for half the pulse, then paired with the next
    /// winding in the travel direction for the other half.
    HalfStep,
}

/// Root configuration structure from TOML.
///
/// Every field has a default matching the reference wiring, so an empty
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// GPIO assignment.
    pub pins: PinMap,

    /// Upper travel bound in steps; the lower bound is always 0.
    pub max_position: u32,

    /// Per-step execution overhead subtracted from the pulse delay.
    #[serde(rename = "overhead_micros")]
    pub overhead: Micros,

    /// Winding excitation pattern.
    pub step_mode: StepMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            pins: PinMap::default(),
            max_position: 4000,
            overhead: Micros(76),
            step_mode: StepMode::Wave,
        }
    }
}
