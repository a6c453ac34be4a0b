//! Mechanical constraints derived from axis configuration.

use super::axis::AxisConfig;
use super::limits::SpeedLimits;
use super::units::Degrees;
use super::validation::{check_degrees_per_step, check_ease_region, check_pulse_period};
use crate::error::ConfigError;

/// Validated motion parameters of one axis.
///
/// These are computed once at initialization; the speed bounds and ease region
/// may later be changed through the controller's setters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MechanicalConstraints {
    /// Degrees moved per step pulse.
    pub degrees_per_step: f32,

    /// Pulse period in microseconds at a speed of 1.0.
    pub min_pulse_period_us: u32,

    /// Speed scalar bounds.
    pub speed: SpeedLimits,

    /// Width of the acceleration and deceleration ramps.
    pub ease_region: Degrees,
}

impl MechanicalConstraints {
    /// Create validated constraints.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in argument order.
    pub fn new(
        degrees_per_step: f32,
        min_pulse_period_us: u32,
        speed: SpeedLimits,
        ease_region: Degrees,
    ) -> Result<Self, ConfigError> {
        let constraints = Self {
            degrees_per_step,
            min_pulse_period_us,
            speed,
            ease_region,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Compute constraints from axis configuration.
    pub fn from_config(config: &AxisConfig) -> Result<Self, ConfigError> {
        let degrees_per_step = config
            .resolve_degrees_per_step()
            .ok_or(ConfigError::MissingResolution)?;

        Self::new(
            degrees_per_step,
            config.min_pulse_period_us,
            config.speed_limits(),
            config.ease_region,
        )
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_degrees_per_step(self.degrees_per_step)?;
        check_pulse_period(self.min_pulse_period_us)?;
        self.speed.validate()?;
        check_ease_region(self.ease_region)?;
        Ok(())
    }

    /// Pulse period while cruising at `max_speed`.
    #[inline]
    pub fn fastest_pulse_period_us(&self) -> u32 {
        crate::motion::pulse_period_us(self.min_pulse_period_us, self.speed.max)
    }

    /// Pulse period at `min_speed`, used at both ends of a ramped move.
    #[inline]
    pub fn slowest_pulse_period_us(&self) -> u32 {
        crate::motion::pulse_period_us(self.min_pulse_period_us, self.speed.min)
    }
}
