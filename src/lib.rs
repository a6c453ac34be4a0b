//! # axis-stepper
//!
//! Non-blocking control of a single rotary stepper axis over STEP/DIR lines,
//! with an angle-based trapezoidal speed ramp.
//!
//! ## Features
//!
//! - **Non-blocking**: `advance()` does at most one pin write and returns
//! - **Angle-based ramp**: speed follows position along the move, with a
//!   triangular profile for moves shorter than the ease region
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Define axes in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axis_stepper::{AxisController, Degrees};
//!
//! let mut axis = AxisController::builder()
//!     .pins(step_pin, dir_pin)
//!     .clock(|| timer.now_micros())
//!     .degrees_per_step(1.8)
//!     .min_pulse_period_us(2000)
//!     .max_speed(5.0)
//!     .min_speed(1.0)
//!     .build()?;
//!
//! axis.set_desired_angle(Degrees(90.0));
//! while !axis.advance()? {
//!     // other cooperative work
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `StdClock`
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, MechanicalConstraints, SpeedLimits, SystemConfig};
pub use error::{ConfigError, Error, MotorError, Result};
pub use motion::{compute_speed, Direction, MotionPhase, RampProfile, RampRegime};
pub use motor::{AxisController, AxisControllerBuilder, DigitalOutputPort, MicrosClock, PulseState, StepDirPins};

#[cfg(feature = "std")]
pub use motor::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Microsteps};
