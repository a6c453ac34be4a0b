//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::units::Degrees;
use super::{AxisConfig, MechanicalConstraints, SystemConfig};

/// Validate a system configuration.
///
/// Checks every axis:
/// - A step resolution is given or derivable, and is > 0
/// - Gear ratio is > 0
/// - Minimum pulse period is > 0
/// - `min_speed > 0` and `max_speed >= min_speed`
/// - Ease region is >= 0
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_name, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    Ok(())
}

/// Validate a single axis configuration.
pub fn validate_axis(config: &AxisConfig) -> Result<()> {
    if config.degrees_per_step.is_none() && (config.gear_ratio.is_nan() || config.gear_ratio <= 0.0) {
        return Err(Error::Config(ConfigError::InvalidGearRatio(config.gear_ratio)));
    }

    MechanicalConstraints::from_config(config)?;
    Ok(())
}

pub(crate) fn check_degrees_per_step(degrees_per_step: f32) -> core::result::Result<(), ConfigError> {
    if !degrees_per_step.is_finite() || degrees_per_step <= 0.0 {
        return Err(ConfigError::InvalidDegreesPerStep(degrees_per_step));
    }
    Ok(())
}

pub(crate) fn check_pulse_period(min_pulse_period_us: u32) -> core::result::Result<(), ConfigError> {
    if min_pulse_period_us == 0 {
        return Err(ConfigError::InvalidPulsePeriod(min_pulse_period_us));
    }
    Ok(())
}

pub(crate) fn check_ease_region(ease_region: Degrees) -> core::result::Result<(), ConfigError> {
    if !ease_region.0.is_finite() || ease_region.0 < 0.0 {
        return Err(ConfigError::InvalidEaseRegion(ease_region.0));
    }
    Ok(())
}

pub(crate) fn check_speed(speed: f32) -> core::result::Result<(), ConfigError> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(ConfigError::InvalidSpeed(speed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Microsteps;
    use crate::config::DEFAULT_EASE_REGION;

    fn make_axis() -> AxisConfig {
        AxisConfig {
            name: heapless::String::try_from("test").unwrap(),
            initial_angle: Degrees(0.0),
            degrees_per_step: None,
            steps_per_revolution: Some(200),
            microsteps: Microsteps::FULL,
            gear_ratio: 1.0,
            min_pulse_period_us: 2000,
            max_speed: 5.0,
            min_speed: 1.0,
            ease_region: DEFAULT_EASE_REGION,
            invert_direction: false,
            smoothing: true,
        }
    }

    #[test]
    fn test_valid_axis() {
        assert!(validate_axis(&make_axis()).is_ok());
    }

    #[test]
    fn test_invalid_gear_ratio() {
        let mut config = make_axis();
        config.gear_ratio = -1.0;

        let result = validate_axis(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidGearRatio(_)))
        ));
    }

    #[test]
    fn test_gear_ratio_ignored_with_explicit_resolution() {
        let mut config = make_axis();
        config.gear_ratio = 0.0;
        config.degrees_per_step = Some(0.9);
        assert!(validate_axis(&config).is_ok());
    }

    #[test]
    fn test_zero_min_speed() {
        let mut config = make_axis();
        config.min_speed = 0.0;
        assert_eq!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidMinSpeed(0.0)))
        );
    }

    #[test]
    fn test_negative_ease_region() {
        let mut config = make_axis();
        config.ease_region = Degrees(-1.0);
        assert_eq!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidEaseRegion(-1.0)))
        );
    }

    #[test]
    fn test_checks() {
        assert!(check_degrees_per_step(1.8).is_ok());
        assert!(check_degrees_per_step(0.0).is_err());
        assert!(check_degrees_per_step(f32::INFINITY).is_err());
        assert!(check_pulse_period(1).is_ok());
        assert!(check_pulse_period(0).is_err());
        assert!(check_ease_region(Degrees(0.0)).is_ok());
        assert!(check_speed(0.01).is_ok());
        assert!(check_speed(0.0).is_err());
        assert!(check_speed(f32::NAN).is_err());
    }
}
