//! Error types for stepper-singer.
//!
//! Provides unified error handling across configuration, note files and motor control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-singer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing, validation or file access error
    Config(ConfigError),
    /// Motor (GPIO) operation error
    Motor(MotorError),
    /// Note record rejected
    Note(NoteError),
    /// Note file could not be opened or read (std only)
    #[cfg(feature = "std")]
    File(heapless::String<128>),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Travel bound must be at least one step
    InvalidMaxPosition(u32),
    /// Two pin roles share the same GPIO line
    DuplicatePin(u8),
    /// Pin number outside the addressable GPIO range
    InvalidPin(u8),
    /// Overhead calibration swallows every possible pulse period
    InvalidOverhead(u32),
    /// Required builder field missing
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
    /// Requested start state lies outside the travel range or phase cycle
    InvalidState {
        /// Requested travel position
        position: u32,
        /// Requested phase index
        phase: u8,
    },
}

/// Note decoding and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteError {
    /// Note has a zero frequency and cannot produce a pulse period
    ZeroFrequency {
        /// Position of the note in the sequence
        index: usize,
    },
    /// Note data length is not a whole number of records
    MisalignedLength {
        /// Byte length of the rejected data
        len: usize,
    },
}

/// Copy `msg` into an error string, cutting it at the last character that fits.
#[cfg(feature = "std")]
pub(crate) fn message(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Note(e) => write!(f, "Invalid note: {}", e),
            #[cfg(feature = "std")]
            Error::File(msg) => write!(f, "File error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMaxPosition(v) => {
                write!(f, "Invalid max position: {}. Must be > 0", v)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "GPIO {} is assigned to more than one role", pin),
            ConfigError::InvalidPin(pin) => write!(f, "Invalid GPIO number: {}. Valid range: 0-53", pin),
            ConfigError::InvalidOverhead(v) => {
                write!(f, "Invalid overhead: {} us. Must be < 1000000", v)
            }
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::InvalidState { position, phase } => {
                write!(f, "Invalid motor state: position {}, phase {}", position, phase)
            }
        }
    }
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::ZeroFrequency { index } => write!(f, "note {} has zero frequency", index),
            NoteError::MisalignedLength { len } => write!(
                f,
                "note data is {} bytes, not a multiple of the {}-byte record size",
                len,
                crate::note::RECORD_SIZE
            ),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<NoteError> for Error {
    fn from(e: NoteError) -> Self {
        Error::Note(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for NoteError {}
