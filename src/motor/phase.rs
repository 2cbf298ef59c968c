//! Winding phase tables.

/// Travel direction along the bounded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards `max_position`.
    #[default]
    Forward,
    /// Towards 0.
    Backward,
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Logical winding role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Coil A.
    A,
    /// Coil B.
    B,
    /// Coil C.
    C,
    /// Coil D.
    D,
}

impl Winding {
    /// All roles in pin-array order.
    pub const ALL: [Winding; 4] = [Winding::A, Winding::B, Winding::C, Winding::D];

    /// Index into a role-ordered pin array.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Winding::A => 0,
            Winding::B => 1,
            Winding::C => 2,
            Winding::D => 3,
        }
    }
}

/// Number of phases in one electrical cycle.
pub const PHASE_COUNT: u8 = 4;

/// Winding energized at each phase index.
const PHASE_WINDINGS: [Winding; 4] = [Winding::A, Winding::B, Winding::C, Winding::D];

/// Second winding paired with each phase during a half step, moving forward.
const FORWARD_COMPANIONS: [Winding; 4] = [Winding::B, Winding::C, Winding::D, Winding::A];

/// Second winding paired with each phase during a half step, moving backward.
const BACKWARD_COMPANIONS: [Winding; 4] = [Winding::D, Winding::A, Winding::B, Winding::C];

/// Winding driven at `phase`.
///
/// `phase` is always in `0..PHASE_COUNT`; callers only obtain it from a
/// [`MotorState`](super::MotorState).
#[inline]
pub fn winding_for(phase: u8) -> Winding {
    PHASE_WINDINGS[usize::from(phase % PHASE_COUNT)]
}

/// Winding that joins `phase` in a half step heading in `direction`.
#[inline]
pub fn companion_for(direction: Direction, phase: u8) -> Winding {
    let table = match direction {
        Direction::Forward => &FORWARD_COMPANIONS,
        Direction::Backward => &BACKWARD_COMPANIONS,
    };
    table[usize::from(phase % PHASE_COUNT)]
}
