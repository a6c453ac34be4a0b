//! Integration tests for axis-stepper.
//!
//! These tests verify the workflow from TOML parsing to a running controller.

mod unit;

use core::cell::Cell;

use axis_stepper::config::units::{Degrees, Microsteps};
use axis_stepper::config::{MechanicalConstraints, SystemConfig};
use axis_stepper::error::{ConfigError, Error};
use axis_stepper::motor::{AxisController, AxisControllerBuilder, DigitalOutputPort};
use embedded_hal::digital::PinState;

// =============================================================================
// Test configuration data
// =============================================================================

const MINIMAL_CONFIG: &str = r#"
[axes.base]
name = "Base"
degrees_per_step = 1.8
min_pulse_period_us = 2000
max_speed = 5.0
min_speed = 1.0
"#;

const FULL_CONFIG: &str = r#"
[axes.shoulder]
name = "Shoulder"
initial_angle_deg = 90.0
steps_per_revolution = 200
microsteps = 8
gear_ratio = 5.0
min_pulse_period_us = 1500
max_speed = 6.0
min_speed = 1.5
ease_region_deg = 10.0
invert_direction = true
smoothing = false

[axes.wrist]
name = "Wrist"
degrees_per_step = 0.9
min_pulse_period_us = 800
max_speed = 3.0
min_speed = 1.0
"#;

// Helper to parse config using toml crate directly
fn parse_config(toml_str: &str) -> Result<SystemConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

struct NullPort;

impl DigitalOutputPort for NullPort {
    fn set_direction(&mut self, _level: PinState) -> axis_stepper::Result<()> {
        Ok(())
    }

    fn set_step(&mut self, _level: PinState) -> axis_stepper::Result<()> {
        Ok(())
    }
}

// =============================================================================
// TOML parsing
// =============================================================================

#[test]
fn parse_minimal_axis_config() {
    let config = parse_config(MINIMAL_CONFIG).expect("Should parse minimal config");

    let axis = config.axis("base").expect("Axis should exist");
    assert_eq!(axis.name.as_str(), "Base");
    assert_eq!(axis.degrees_per_step, Some(1.8));
    assert_eq!(axis.min_pulse_period_us, 2000);
    assert_eq!(axis.initial_angle, Degrees(0.0));
    assert_eq!(axis.ease_region, Degrees(5.0));
    assert!(axis.smoothing);
}

#[test]
fn parse_full_axis_config() {
    let config = parse_config(FULL_CONFIG).expect("Should parse full config");

    let axis = config.axis("shoulder").expect("Shoulder should exist");
    assert_eq!(axis.initial_angle, Degrees(90.0));
    assert_eq!(axis.steps_per_revolution, Some(200));
    assert_eq!(axis.microsteps, Microsteps::EIGHTH);
    assert!((axis.gear_ratio - 5.0).abs() < 0.001);
    assert_eq!(axis.ease_region, Degrees(10.0));
    assert!(axis.invert_direction);
    assert!(!axis.smoothing);

    let names: Vec<_> = config.axis_names().collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"shoulder"));
    assert!(names.contains(&"wrist"));
}

#[test]
fn invalid_microsteps_fail_to_parse() {
    let toml = r#"
[axes.bad]
name = "Bad"
steps_per_revolution = 200
microsteps = 3
min_pulse_period_us = 2000
max_speed = 5.0
min_speed = 1.0
"#;

    assert!(parse_config(toml).is_err());
}

// =============================================================================
// Config loading workflow
// =============================================================================

#[test]
fn constraints_from_motor_geometry() {
    let config = parse_config(FULL_CONFIG).expect("Config should parse");
    let axis = config.axis("shoulder").unwrap();

    let constraints = MechanicalConstraints::from_config(axis).expect("Valid constraints");

    // 200 base * 8 microsteps * 5.0 gear = 8000 steps per output revolution
    assert!((constraints.degrees_per_step - 0.045).abs() < 1e-6);
    assert_eq!(constraints.min_pulse_period_us, 1500);
    assert_eq!(constraints.fastest_pulse_period_us(), 250);
    assert_eq!(constraints.slowest_pulse_period_us(), 1000);
}

#[test]
fn validated_parse_and_file_load() {
    let config = axis_stepper::parse_config(FULL_CONFIG).expect("Config should validate");
    assert_eq!(config.len(), 2);

    let path = std::env::temp_dir().join("axis_stepper_integration.toml");
    std::fs::write(&path, MINIMAL_CONFIG).unwrap();
    let loaded = axis_stepper::load_config(&path).expect("File should load");
    std::fs::remove_file(&path).ok();

    assert!(loaded.axis("base").is_some());
}

#[test]
fn empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(config.is_empty());
    assert!(axis_stepper::validate_config(&config).is_ok());
}

// =============================================================================
// Builder
// =============================================================================

#[test]
fn builder_from_config() {
    let config = parse_config(FULL_CONFIG).unwrap();
    let ticks = Cell::new(0u32);

    let axis = AxisControllerBuilder::new()
        .from_config(&config, "shoulder")
        .expect("Axis should exist")
        .port(NullPort)
        .clock(|| ticks.get())
        .build()
        .expect("Should build");

    assert_eq!(axis.name(), "Shoulder");
    assert_eq!(axis.current_angle(), Degrees(90.0));
    assert_eq!(axis.desired_angle(), Degrees(90.0));
    assert!(axis.is_direction_reversed());
    assert!(!axis.is_smoothing());
    assert_eq!(axis.speed(), 6.0);
    assert_eq!(axis.ease_region(), Degrees(10.0));
}

#[test]
fn builder_unknown_axis() {
    let config = parse_config(MINIMAL_CONFIG).unwrap();

    let result = AxisControllerBuilder::<NullPort, fn() -> u32>::new().from_config(&config, "elbow");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::AxisNotFound(ref name))) if name.as_str() == "elbow"
    ));
}

#[test]
fn builder_manual_fields() {
    let axis = AxisController::builder()
        .name("manual")
        .port(NullPort)
        .clock((|| 0) as fn() -> u32)
        .initial_angle(Degrees(-15.0))
        .degrees_per_step(0.9)
        .min_pulse_period_us(1000)
        .max_speed(4.0)
        .min_speed(2.0)
        .ease_region(Degrees(3.0))
        .build()
        .expect("Should build");

    assert_eq!(axis.name(), "manual");
    assert_eq!(axis.current_angle(), Degrees(-15.0));
    assert_eq!(axis.degrees_per_step(), 0.9);
    assert_eq!(axis.min_pulse_period_us(), 1000);
    assert_eq!(axis.pulse_period_us(), 250);
}

#[test]
fn builder_rejects_invalid_parameters() {
    let base = || {
        AxisControllerBuilder::<NullPort, fn() -> u32>::new()
            .port(NullPort)
            .clock((|| 0) as fn() -> u32)
            .degrees_per_step(1.8)
            .min_pulse_period_us(2000)
            .max_speed(5.0)
            .min_speed(1.0)
    };

    assert!(base().build().is_ok());
    assert_eq!(
        base().min_speed(0.0).build().err(),
        Some(Error::Config(ConfigError::InvalidMinSpeed(0.0)))
    );
    assert_eq!(
        base().max_speed(0.5).build().err(),
        Some(Error::Config(ConfigError::InvalidSpeedBounds { min: 1.0, max: 0.5 }))
    );
    assert_eq!(
        base().degrees_per_step(0.0).build().err(),
        Some(Error::Config(ConfigError::InvalidDegreesPerStep(0.0)))
    );
    assert_eq!(
        base().min_pulse_period_us(0).build().err(),
        Some(Error::Config(ConfigError::InvalidPulsePeriod(0)))
    );
    assert_eq!(
        base().ease_region(Degrees(-1.0)).build().err(),
        Some(Error::Config(ConfigError::InvalidEaseRegion(-1.0)))
    );
}

#[test]
fn builder_missing_fields() {
    let no_port = AxisControllerBuilder::<NullPort, fn() -> u32>::new()
        .clock((|| 0) as fn() -> u32)
        .build();
    assert_eq!(
        no_port.err(),
        Some(Error::Config(ConfigError::MissingField("port")))
    );

    let no_resolution = AxisControllerBuilder::<NullPort, fn() -> u32>::new()
        .port(NullPort)
        .clock((|| 0) as fn() -> u32)
        .build();
    assert_eq!(
        no_resolution.err(),
        Some(Error::Config(ConfigError::MissingResolution))
    );
}
