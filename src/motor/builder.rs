//! Builder pattern for AxisController.

use embedded_hal::digital::OutputPin;

use crate::config::units::Degrees;
use crate::config::{AxisConfig, MechanicalConstraints, SpeedLimits, SystemConfig, DEFAULT_EASE_REGION};
use crate::error::{ConfigError, Error, Result};

use super::clock::MicrosClock;
use super::controller::AxisController;
use super::port::{DigitalOutputPort, StepDirPins};

/// Builder for creating AxisController instances.
pub struct AxisControllerBuilder<P, C>
where
    P: DigitalOutputPort,
    C: MicrosClock,
{
    port: Option<P>,
    clock: Option<C>,
    name: Option<heapless::String<32>>,
    initial_angle: Degrees,
    degrees_per_step: Option<f32>,
    min_pulse_period_us: Option<u32>,
    max_speed: Option<f32>,
    min_speed: Option<f32>,
    ease_region: Degrees,
    invert_direction: bool,
    smoothing: bool,
}

impl<P, C> Default for AxisControllerBuilder<P, C>
where
    P: DigitalOutputPort,
    C: MicrosClock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C> AxisControllerBuilder<P, C>
where
    P: DigitalOutputPort,
    C: MicrosClock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            port: None,
            clock: None,
            name: None,
            initial_angle: Degrees::ZERO,
            degrees_per_step: None,
            min_pulse_period_us: None,
            max_speed: None,
            min_speed: None,
            ease_region: DEFAULT_EASE_REGION,
            invert_direction: false,
            smoothing: true,
        }
    }

    /// Set the STEP/DIR output port.
    pub fn port(mut self, port: P) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the microsecond clock.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the axis name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the angle the axis starts at.
    pub fn initial_angle(mut self, angle: Degrees) -> Self {
        self.initial_angle = angle;
        self
    }

    /// Set degrees moved per step pulse.
    pub fn degrees_per_step(mut self, degrees: f32) -> Self {
        self.degrees_per_step = Some(degrees);
        self
    }

    /// Set the pulse period in microseconds at a speed of 1.0.
    pub fn min_pulse_period_us(mut self, period_us: u32) -> Self {
        self.min_pulse_period_us = Some(period_us);
        self
    }

    /// Set the cruise speed.
    pub fn max_speed(mut self, speed: f32) -> Self {
        self.max_speed = Some(speed);
        self
    }

    /// Set the speed at both ends of a move.
    pub fn min_speed(mut self, speed: f32) -> Self {
        self.min_speed = Some(speed);
        self
    }

    /// Set the ramp width (default 5 degrees).
    pub fn ease_region(mut self, region: Degrees) -> Self {
        self.ease_region = region;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Enable or disable the speed ramp (default enabled).
    pub fn smoothing(mut self, enabled: bool) -> Self {
        self.smoothing = enabled;
        self
    }

    /// Configure from an AxisConfig.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name.clone());
        self.initial_angle = config.initial_angle;
        self.degrees_per_step = config.resolve_degrees_per_step();
        self.min_pulse_period_us = Some(config.min_pulse_period_us);
        self.max_speed = Some(config.max_speed);
        self.min_speed = Some(config.min_speed);
        self.ease_region = config.ease_region;
        self.invert_direction = config.invert_direction;
        self.smoothing = config.smoothing;
        self
    }

    /// Configure from SystemConfig by axis name.
    pub fn from_config(self, config: &SystemConfig, axis_name: &str) -> Result<Self> {
        let axis_config = config.axis(axis_name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                heapless::String::try_from(axis_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_axis_config(axis_config))
    }

    /// Build the AxisController.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or any parameter fails
    /// validation.
    pub fn build(self) -> Result<AxisController<P, C>> {
        let port = self.port.ok_or(ConfigError::MissingField("port"))?;
        let clock = self.clock.ok_or(ConfigError::MissingField("clock"))?;
        let degrees_per_step = self.degrees_per_step.ok_or(ConfigError::MissingResolution)?;
        let min_pulse_period_us = self
            .min_pulse_period_us
            .ok_or(ConfigError::MissingField("min_pulse_period_us"))?;
        let max_speed = self.max_speed.ok_or(ConfigError::MissingField("max_speed"))?;
        let min_speed = self.min_speed.ok_or(ConfigError::MissingField("min_speed"))?;

        let constraints = MechanicalConstraints::new(
            degrees_per_step,
            min_pulse_period_us,
            SpeedLimits::new(min_speed, max_speed)?,
            self.ease_region,
        )?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("axis").unwrap_or_default());

        Ok(AxisController::new(
            port,
            clock,
            constraints,
            name,
            self.initial_angle,
            self.invert_direction,
            self.smoothing,
        ))
    }
}

impl<STEP, DIR, C> AxisControllerBuilder<StepDirPins<STEP, DIR>, C>
where
    STEP: OutputPin,
    DIR: OutputPin,
    C: MicrosClock,
{
    /// Use a pair of embedded-hal output pins as the port.
    pub fn pins(self, step_pin: STEP, dir_pin: DIR) -> Self {
        self.port(StepDirPins::new(step_pin, dir_pin))
    }
}
