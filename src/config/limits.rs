//! Speed bounds for the ramp calculator.

use libm::{fmaxf, fminf};

use crate::error::ConfigError;

/// Speed scalar bounds (`min_speed <= speed <= max_speed`).
///
/// Speeds are dimensionless multipliers: the pulse period is the minimum pulse
/// period divided by the speed, so a speed of zero is never representable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLimits {
    /// Slowest speed, used at the ends of every move.
    pub min: f32,

    /// Cruise speed.
    pub max: f32,
}

impl SpeedLimits {
    /// Create validated speed limits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMinSpeed` if `min` is not strictly positive, or
    /// `InvalidSpeedBounds` if `max < min`.
    pub fn new(min: f32, max: f32) -> Result<Self, ConfigError> {
        let limits = Self { min, max };
        limits.validate()?;
        Ok(limits)
    }

    /// Check that the bounds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || self.min <= 0.0 {
            return Err(ConfigError::InvalidMinSpeed(self.min));
        }
        if !self.max.is_finite() || self.max < self.min {
            return Err(ConfigError::InvalidSpeedBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Replace the minimum speed, keeping the maximum.
    pub fn with_min(self, min: f32) -> Result<Self, ConfigError> {
        Self::new(min, self.max)
    }

    /// Replace the maximum speed, keeping the minimum.
    pub fn with_max(self, max: f32) -> Result<Self, ConfigError> {
        Self::new(self.min, max)
    }

    /// Clamp a speed into the bounds.
    #[inline]
    pub fn clamp(&self, speed: f32) -> f32 {
        fminf(fmaxf(speed, self.min), self.max)
    }

    /// Width of the speed range.
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}
