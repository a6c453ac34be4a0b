//! Error types for axis-stepper.
//!
//! Configuration faults are reported when a controller is built or a setter is
//! called, never in the middle of a move.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all axis-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Hardware operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// A required builder field was not provided
    MissingField(&'static str),
    /// Neither `degrees_per_step` nor `steps_per_revolution` was given
    MissingResolution,
    /// Invalid step resolution (must be > 0)
    InvalidDegreesPerStep(f32),
    /// Invalid minimum pulse period (must be > 0)
    InvalidPulsePeriod(u32),
    /// Invalid minimum speed (must be > 0)
    InvalidMinSpeed(f32),
    /// Invalid speed bounds (max must be >= min)
    InvalidSpeedBounds {
        /// Minimum speed
        min: f32,
        /// Maximum speed
        max: f32,
    },
    /// Invalid manual speed override (must be > 0)
    InvalidSpeed(f32),
    /// Invalid ease region (must be >= 0)
    InvalidEaseRegion(f32),
    /// Invalid microstep value (must be power of 2: 1, 2, 4, 8, 16, 32, 64, 128, 256)
    InvalidMicrosteps(u16),
    /// Invalid gear ratio (must be > 0)
    InvalidGearRatio(f32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::MissingResolution => {
                write!(f, "Either degrees_per_step or steps_per_revolution is required")
            }
            ConfigError::InvalidDegreesPerStep(v) => {
                write!(f, "Invalid degrees per step: {}. Must be > 0", v)
            }
            ConfigError::InvalidPulsePeriod(v) => {
                write!(f, "Invalid minimum pulse period: {} us. Must be > 0", v)
            }
            ConfigError::InvalidMinSpeed(v) => write!(f, "Invalid min speed: {}. Must be > 0", v),
            ConfigError::InvalidSpeedBounds { min, max } => {
                write!(f, "Invalid speed bounds: max ({}) must be >= min ({})", max, min)
            }
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid speed: {}. Must be > 0", v),
            ConfigError::InvalidEaseRegion(v) => {
                write!(f, "Invalid ease region: {} degrees. Must be >= 0", v)
            }
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

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

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
