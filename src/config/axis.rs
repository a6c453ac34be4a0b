//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::SpeedLimits;
use super::units::{Degrees, Microsteps};

/// Ease region used when none is configured.
pub const DEFAULT_EASE_REGION: Degrees = Degrees(5.0);

/// Complete configuration of one stepper axis.
///
/// The step resolution is either given directly as `degrees_per_step` or
/// derived from `steps_per_revolution`, `microsteps` and `gear_ratio`.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Angle the axis is assumed to sit at on power-up.
    #[serde(default, rename = "initial_angle_deg")]
    pub initial_angle: Degrees,

    /// Degrees moved per step pulse. Takes precedence over the derived value.
    #[serde(default)]
    pub degrees_per_step: Option<f32>,

    /// Base steps per revolution (typically 200 for 1.8° motors).
    #[serde(default)]
    pub steps_per_revolution: Option<u16>,

    /// Microstep setting of the driver.
    #[serde(default)]
    pub microsteps: Microsteps,

    /// Gear ratio (output:input, e.g., 5.0 means 5:1 reduction).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f32,

    /// Pulse period in microseconds at a speed of 1.0.
    pub min_pulse_period_us: u32,

    /// Cruise speed scalar.
    pub max_speed: f32,

    /// Speed scalar at both ends of a move (must be > 0).
    pub min_speed: f32,

    /// Width of the acceleration and deceleration ramps.
    #[serde(default = "default_ease_region", rename = "ease_region_deg")]
    pub ease_region: Degrees,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Use the speed ramp (otherwise the speed stays at its set value).
    #[serde(default = "default_smoothing")]
    pub smoothing: bool,
}

fn default_gear_ratio() -> f32 {
    1.0
}

fn default_ease_region() -> Degrees {
    DEFAULT_EASE_REGION
}

fn default_smoothing() -> bool {
    true
}

impl AxisConfig {
    /// Speed bounds as configured (not yet validated).
    pub fn speed_limits(&self) -> SpeedLimits {
        SpeedLimits {
            min: self.min_speed,
            max: self.max_speed,
        }
    }

    /// Total steps per output shaft revolution, if the motor geometry is given.
    pub fn total_steps_per_revolution(&self) -> Option<f32> {
        self.steps_per_revolution
            .map(|steps| steps as f32 * self.microsteps.value() as f32 * self.gear_ratio)
    }

    /// Resolve the step resolution in degrees.
    ///
    /// Returns `None` if neither `degrees_per_step` nor `steps_per_revolution`
    /// is configured.
    pub fn resolve_degrees_per_step(&self) -> Option<f32> {
        self.degrees_per_step
            .or_else(|| self.total_steps_per_revolution().map(|total| 360.0 / total))
    }
}
