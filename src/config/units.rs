//! Unit types for timing quantities.
//!
//! Keeps microsecond durations and frequencies apart at compile time; a note
//! record carries both as bare `u32` words on disk.

use serde::Deserialize;

/// Microseconds per second.
pub const MICROS_PER_SEC: u32 = 1_000_000;

/// Duration in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Micros(pub u32);

impl Micros {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this is a zero-length duration.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Half of this duration, rounded down.
    #[inline]
    pub const fn half(self) -> Self {
        Self(self.0 / 2)
    }
}

/// Frequency in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Hertz(pub u32);

impl Hertz {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of whole cycles that fit into `duration`.
    ///
    /// Computed in 64 bits so long notes at high pitches cannot overflow.
    #[inline]
    pub fn cycles_in(self, duration: Micros) -> u64 {
        u64::from(duration.0) * u64::from(self.0) / u64::from(MICROS_PER_SEC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_in() {
        assert_eq!(Hertz(1000).cycles_in(Micros(5000)), 5);
        assert_eq!(Hertz(440).cycles_in(Micros(999)), 0);
        // u32::MAX * u32::MAX / 1e6 would overflow a u32 product
        assert_eq!(
            Hertz(u32::MAX).cycles_in(Micros(u32::MAX)),
            (u64::from(u32::MAX) * u64::from(u32::MAX)) / 1_000_000
        );
    }
}
