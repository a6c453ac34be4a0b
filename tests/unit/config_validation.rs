//! Unit tests for configuration validation.

use axis_stepper::config::{validate_config, SystemConfig};
use axis_stepper::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[axes.base]
name = "base"
degrees_per_step = 1.8
min_pulse_period_us = 2000
max_speed = 5.0
min_speed = 1.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when max speed is below min speed.
#[test]
fn test_inverted_speed_bounds() {
    let toml_str = r#"
[axes.base]
name = "base"
degrees_per_step = 1.8
min_pulse_period_us = 2000
max_speed = 1.0
min_speed = 2.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSpeedBounds { min: 2.0, max: 1.0 }))
    );
}

/// Test validation fails without any step resolution.
#[test]
fn test_missing_resolution() {
    let toml_str = r#"
[axes.base]
name = "base"
min_pulse_period_us = 2000
max_speed = 5.0
min_speed = 1.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::MissingResolution))
    );
}

/// Test validation fails for a zero pulse period.
#[test]
fn test_zero_pulse_period() {
    let toml_str = r#"
[axes.base]
name = "base"
degrees_per_step = 1.8
min_pulse_period_us = 0
max_speed = 5.0
min_speed = 1.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
