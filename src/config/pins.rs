//! GPIO pin assignment from TOML.

use serde::Deserialize;

/// Highest BCM line number addressable on a Raspberry Pi GPIO bank.
pub const MAX_GPIO: u8 = 53;

/// BCM numbers for the four winding roles and the H-bridge enable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinMap {
    /// Winding A.
    pub a: u8,
    /// Winding B.
    pub b: u8,
    /// Winding C.
    pub c: u8,
    /// Winding D.
    pub d: u8,
    /// H-bridge enable.
    pub enable: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            a: 2,
            b: 17,
            c: 3,
            d: 18,
            enable: 4,
        }
    }
}

impl PinMap {
    /// Winding pins in role order A, B, C, D.
    pub fn windings(&self) -> [u8; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Every configured pin, windings first, enable last.
    pub fn all(&self) -> [u8; 5] {
        [self.a, self.b, self.c, self.d, self.enable]
    }
}
