//! Error types for scan-motion.
//!
//! Operator abort is not represented here: it is a normal
//! [`Outcome::Aborted`](crate::motion::Outcome) value. These errors cover
//! configuration problems, hardware I/O failures and the homing safety cap.

use core::fmt;

use crate::motion::Axis;
use crate::motor::Signal;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all scan-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin or signal I/O error
    Motor(MotorError),
    /// Homing did not reach the rest limit
    Homing(HomingError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A pulse period of zero was configured
    InvalidPulsePeriod(&'static str),
    /// Start offset must lie strictly before the end of the track
    InvalidStartOffset {
        /// Configured start offset in steps
        steps_to_start: u32,
        /// Configured track length in steps
        steps_to_end: u32,
    },
    /// Four increments must cover exactly the scan span
    IncrementSpanMismatch {
        /// Configured increment in steps
        steps_for_inc: u32,
        /// Scan span (`steps_to_end - steps_to_start`)
        span: u32,
    },
    /// Rotation step counts must be non-zero
    InvalidRotation(&'static str),
    /// The same pin number is used twice
    DuplicatePin(u8),
    /// Homing step cap must be non-zero
    InvalidHomingLimit,
    /// A builder was finished without a required part
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware I/O errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Writing a step or direction pin failed
    Pin {
        /// Axis whose pin failed
        axis: Axis,
    },
    /// Reading an input signal failed
    Signal(Signal),
}

/// Homing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum HomingError {
    /// The rest limit was not observed within the step cap
    Timeout {
        /// Pulses emitted before giving up
        steps: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Homing(e) => write!(f, "Homing error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidPulsePeriod(which) => {
                write!(f, "Invalid pulse period '{}': must be > 0", which)
            }
            ConfigError::InvalidStartOffset {
                steps_to_start,
                steps_to_end,
            } => write!(
                f,
                "Start offset {} must be below track length {}",
                steps_to_start, steps_to_end
            ),
            ConfigError::IncrementSpanMismatch {
                steps_for_inc,
                span,
            } => write!(
                f,
                "4 x increment ({}) must equal scan span {}",
                steps_for_inc, span
            ),
            ConfigError::InvalidRotation(which) => {
                write!(f, "Invalid rotation '{}': must be > 0", which)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} assigned more than once", pin),
            ConfigError::InvalidHomingLimit => write!(f, "Homing step cap must be > 0"),
            ConfigError::MissingComponent(what) => write!(f, "{} is required", what),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::Pin { axis } => write!(f, "GPIO pin operation failed on {:?} axis", axis),
            MotorError::Signal(signal) => write!(f, "Reading {:?} signal failed", signal),
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::Timeout { steps } => {
                write!(f, "Rest limit not reached after {} steps", steps)
            }
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

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}
