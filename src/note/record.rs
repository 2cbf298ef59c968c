//! A single note.

use crate::config::units::{Hertz, Micros};

/// One musical tone rendered as motor vibration.
///
/// Immutable once read: a silent gap of `pause`, then `frequency` steps per
/// second for `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Note {
    /// Silence before the note; zero means no gap.
    pub pause: Micros,
    /// Step rate, which is the audible pitch.
    pub frequency: Hertz,
    /// How long the note sounds.
    pub duration: Micros,
}

impl Note {
    /// Create a note from raw microsecond and hertz values.
    #[inline]
    pub const fn new(pause_us: u32, frequency_hz: u32, duration_us: u32) -> Self {
        Self {
            pause: Micros(pause_us),
            frequency: Hertz(frequency_hz),
            duration: Micros(duration_us),
        }
    }

    /// Whether the note can produce a pulse period at all.
    #[inline]
    pub const fn is_playable(&self) -> bool {
        self.frequency.0 != 0
    }

    /// Number of whole steps this note spans.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.frequency.cycles_in(self.duration)
    }
}
