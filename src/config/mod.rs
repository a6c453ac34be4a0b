//! Configuration module for axis-stepper.
//!
//! Provides types for loading and validating axis configurations from TOML
//! files (with `std` feature) or pre-parsed data.

mod axis;
mod limits;
mod mechanical;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::{AxisConfig, DEFAULT_EASE_REGION};
pub use limits::SpeedLimits;
pub use mechanical::MechanicalConstraints;
pub use system::{SystemConfig, MAX_AXES};
pub use validation::{validate_axis, validate_config};
pub(crate) use validation::{check_ease_region, check_speed};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Microsteps};
