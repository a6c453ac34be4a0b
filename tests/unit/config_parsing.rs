//! Unit tests for TOML configuration parsing.

use axis_stepper::config::{load_config, SystemConfig};

/// Test parsing a valid axis configuration from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axes.turret]
name = "turret"
degrees_per_step = 1.8
min_pulse_period_us = 2000
max_speed = 5.0
min_speed = 1.0
ease_region_deg = 7.5
invert_direction = false
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("turret").expect("Axis not found");

    assert_eq!(axis.name.as_str(), "turret");
    assert_eq!(axis.degrees_per_step, Some(1.8));
    assert_eq!(axis.min_pulse_period_us, 2000);
    assert_eq!(axis.max_speed, 5.0);
    assert_eq!(axis.min_speed, 1.0);
    assert_eq!(axis.ease_region.0, 7.5);
    assert!(!axis.invert_direction);
}

/// Test that the derived resolution is used when degrees_per_step is absent.
#[test]
fn test_parse_motor_geometry() {
    let toml_str = r#"
[axes.tilt]
name = "tilt"
steps_per_revolution = 400
microsteps = 2
min_pulse_period_us = 1000
max_speed = 4.0
min_speed = 1.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("tilt").expect("Axis not found");

    assert_eq!(axis.microsteps.value(), 2);
    assert_eq!(axis.gear_ratio, 1.0);
    let dps = axis.resolve_degrees_per_step().unwrap();
    assert!((dps - 0.45).abs() < 1e-6);
}

/// Test that a missing required field is a parse error.
#[test]
fn test_missing_required_field() {
    let toml_str = r#"
[axes.tilt]
name = "tilt"
degrees_per_step = 1.8
max_speed = 4.0
min_speed = 1.0
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test that loading a missing file reports an error.
#[test]
fn test_load_missing_file() {
    assert!(load_config("does/not/exist.toml").is_err());
}
