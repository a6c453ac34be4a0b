//! Digital output capability for the STEP and DIR lines.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{MotorError, Result};

/// The two logic outputs a step/direction driver needs.
///
/// The controller only ever drives these two lines, so anything that can set
/// them (GPIO pins, a shift register, a test recorder) can stand in.
pub trait DigitalOutputPort {
    /// Drive the direction line.
    fn set_direction(&mut self, level: PinState) -> Result<()>;

    /// Drive the step line.
    fn set_step(&mut self, level: PinState) -> Result<()>;
}

impl<T: DigitalOutputPort + ?Sized> DigitalOutputPort for &mut T {
    fn set_direction(&mut self, level: PinState) -> Result<()> {
        (**self).set_direction(level)
    }

    fn set_step(&mut self, level: PinState) -> Result<()> {
        (**self).set_step(level)
    }
}

/// [`DigitalOutputPort`] over a pair of embedded-hal output pins.
///
/// Pins must already be configured as push-pull outputs by the HAL.
#[derive(Debug)]
pub struct StepDirPins<STEP, DIR> {
    step_pin: STEP,
    dir_pin: DIR,
}

impl<STEP, DIR> StepDirPins<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    /// Wrap a STEP pin and a DIR pin.
    pub fn new(step_pin: STEP, dir_pin: DIR) -> Self {
        Self { step_pin, dir_pin }
    }

    /// Give the pins back.
    pub fn release(self) -> (STEP, DIR) {
        (self.step_pin, self.dir_pin)
    }
}

impl<STEP, DIR> DigitalOutputPort for StepDirPins<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    fn set_direction(&mut self, level: PinState) -> Result<()> {
        self.dir_pin
            .set_state(level)
            .map_err(|_| MotorError::PinError)?;
        Ok(())
    }

    fn set_step(&mut self, level: PinState) -> Result<()> {
        self.step_pin
            .set_state(level)
            .map_err(|_| MotorError::PinError)?;
        Ok(())
    }
}
