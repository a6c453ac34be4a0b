//! Non-blocking single-axis controller.
//!
//! The caller polls [`AxisController::advance`] in a loop. Each call reads the
//! clock once, decides whether the step line is due for a transition, and
//! performs at most one pin write before returning.

use embedded_hal::digital::PinState;

use crate::config::units::Degrees;
use crate::config::{check_ease_region, check_speed, MechanicalConstraints};
use crate::error::Result;
use crate::motion::{pulse_period_us, Direction, MotionPhase, PulseTimer, RampProfile};

use super::builder::AxisControllerBuilder;
use super::clock::MicrosClock;
use super::port::DigitalOutputPort;
use super::position::AngleTracker;
use super::state::PulseState;

/// Motion controller for one stepper axis.
///
/// Generic over:
/// - `P`: STEP/DIR outputs (must implement [`DigitalOutputPort`])
/// - `C`: microsecond clock (must implement [`MicrosClock`])
///
/// Not thread-safe; each axis gets its own controller.
pub struct AxisController<P, C>
where
    P: DigitalOutputPort,
    C: MicrosClock,
{
    /// STEP and DIR outputs.
    port: P,

    /// Time source for pulse spacing.
    clock: C,

    /// Axis name for logging/debugging.
    name: heapless::String<32>,

    /// Current, desired and move-start angles.
    angles: AngleTracker,

    /// Step resolution, pulse period, speed bounds and ease region.
    constraints: MechanicalConstraints,

    /// Speed scalar the pulse period was last derived from.
    speed: f32,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Whether `advance` recomputes the speed from the ramp.
    smoothing: bool,

    /// Step line state.
    state: PulseState,

    /// Within one step of the target.
    stopped: bool,

    /// Direction of travel during the current move.
    direction: Option<Direction>,

    /// Level last written to the DIR pin (cached to avoid redundant writes).
    dir_level: Option<PinState>,

    /// Time of the last step line transition.
    timer: PulseTimer,
}

impl<P, C> AxisController<P, C>
where
    P: DigitalOutputPort,
    C: MicrosClock,
{
    /// Start building a controller.
    pub fn builder() -> AxisControllerBuilder<P, C> {
        AxisControllerBuilder::new()
    }

    /// Create a controller at rest at `initial_angle`.
    pub(crate) fn new(
        port: P,
        clock: C,
        constraints: MechanicalConstraints,
        name: heapless::String<32>,
        initial_angle: Degrees,
        invert_direction: bool,
        smoothing: bool,
    ) -> Self {
        let timer = PulseTimer::new(clock.now_micros());

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: axis ready at {} deg, {} deg/step, speed {}..{}",
            name.as_str(),
            initial_angle.0,
            constraints.degrees_per_step,
            constraints.speed.min,
            constraints.speed.max
        );

        Self {
            port,
            clock,
            name,
            angles: AngleTracker::new(initial_angle),
            speed: constraints.speed.max,
            constraints,
            invert_direction,
            smoothing,
            state: PulseState::Idle,
            stopped: true,
            direction: None,
            dir_level: None,
            timer,
        }
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the motion parameters.
    #[inline]
    pub fn constraints(&self) -> &MechanicalConstraints {
        &self.constraints
    }

    /// Borrow the output port.
    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutably borrow the output port.
    #[inline]
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Tear down the controller and return its port and clock.
    pub fn release(self) -> (P, C) {
        (self.port, self.clock)
    }

    /// Set the width of the acceleration and deceleration ramps.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEaseRegion` if `region` is negative or not finite.
    pub fn set_ease_region(&mut self, region: Degrees) -> Result<()> {
        check_ease_region(region)?;
        self.constraints.ease_region = region;
        Ok(())
    }

    /// Get the ramp width.
    #[inline]
    pub fn ease_region(&self) -> Degrees {
        self.constraints.ease_region
    }

    /// Set the target angle. The ramp restarts from the current angle.
    pub fn set_desired_angle(&mut self, angle: Degrees) {
        self.angles.retarget(angle);
        self.refresh_stopped();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: target {} deg from {} deg",
            self.name.as_str(),
            angle.0,
            self.angles.current().0
        );
    }

    /// Set the target relative to the current angle.
    pub fn move_by(&mut self, delta: Degrees) {
        self.set_desired_angle(self.angles.current() + delta);
    }

    /// Overwrite the current angle without moving (recalibration).
    pub fn set_current_angle(&mut self, angle: Degrees) {
        self.angles.set_current(angle);
        self.refresh_stopped();
    }

    // Bookkeeping only; pins are left alone until the next poll.
    fn refresh_stopped(&mut self) {
        self.stopped = self.angles.is_within(self.constraints.degrees_per_step);
    }

    /// Get the target angle.
    #[inline]
    pub fn desired_angle(&self) -> Degrees {
        self.angles.desired()
    }

    /// Get the current angle estimate.
    #[inline]
    pub fn current_angle(&self) -> Degrees {
        self.angles.current()
    }

    /// Get the angle the current move started from.
    #[inline]
    pub fn move_start(&self) -> Degrees {
        self.angles.move_start()
    }

    /// Signed distance from the current angle to the target.
    #[inline]
    pub fn distance_to_go(&self) -> Degrees {
        self.angles.distance_to_go()
    }

    /// Poll the controller.
    ///
    /// Returns `Ok(true)` when the axis is within one step of its target, in
    /// which case no pin is touched. Otherwise performs at most one of:
    /// writing a changed direction level, raising the step line, or lowering
    /// it (which completes a step and moves the current angle).
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a pin write fails. The transition is
    /// not recorded and will be retried on the next poll.
    pub fn advance(&mut self) -> Result<bool> {
        let now = self.clock.now_micros();
        if self.timer.observe(now) {
            #[cfg(feature = "defmt")]
            defmt::trace!("{}: clock wrapped, pulse reference reset", self.name.as_str());
        }

        if self.angles.is_within(self.constraints.degrees_per_step) {
            if !self.stopped {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "{}: reached {} deg (target {} deg)",
                    self.name.as_str(),
                    self.angles.current().0,
                    self.angles.desired().0
                );
            }
            self.stopped = true;
            self.state = self.state.settle();
            return Ok(true);
        }

        self.stopped = false;
        self.state = self.state.wake();

        let polarity = if self.invert_direction { -1.0 } else { 1.0 };
        let natural = Direction::toward(
            self.angles.current().0 * polarity,
            self.angles.desired().0 * polarity,
        );
        let direction = if self.invert_direction {
            natural.opposite()
        } else {
            natural
        };
        let level = natural.pin_level();
        if self.dir_level != Some(level) {
            // A pulse in flight completes in the direction it started with.
            if self.state != PulseState::PulseHigh {
                self.port.set_direction(level)?;
                self.dir_level = Some(level);
                self.direction = Some(direction);

                #[cfg(feature = "defmt")]
                defmt::debug!("{}: direction {}", self.name.as_str(), direction);

                // The step edge waits for the next poll so DIR settles first.
                return Ok(false);
            }
        } else {
            self.direction = Some(direction);
        }
        let stepping = self.direction.unwrap_or(direction);

        if self.smoothing {
            self.speed = self.ramp_profile().speed_at(self.angles.current());
        }

        let period = pulse_period_us(self.constraints.min_pulse_period_us, self.speed);
        if self.timer.is_due(now, period) {
            let next = self.state.toggle();
            self.port.set_step(next.step_level())?;
            if next == PulseState::PulseLow {
                self.angles
                    .step(self.constraints.degrees_per_step * stepping.sign());
            }
            self.state = next;
            self.timer.mark(now);
        }

        Ok(false)
    }

    /// Flip the meaning of "forward" on the direction pin.
    pub fn reverse_direction(&mut self) {
        self.invert_direction = !self.invert_direction;
    }

    /// Whether direction pin logic is currently inverted.
    #[inline]
    pub fn is_direction_reversed(&self) -> bool {
        self.invert_direction
    }

    /// Whether the axis is within one step of its target.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Opposite of [`is_stopped`](Self::is_stopped).
    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.stopped
    }

    /// Whether the axis is ready for a new target (same as `is_stopped`).
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.stopped
    }

    /// Enable or disable the speed ramp.
    ///
    /// With the ramp disabled, the speed set by [`set_speed`](Self::set_speed)
    /// is used for the whole move.
    pub fn enable_smoothing(&mut self, enabled: bool) {
        self.smoothing = enabled;
    }

    /// Whether the speed ramp is in use.
    #[inline]
    pub fn is_smoothing(&self) -> bool {
        self.smoothing
    }

    /// Override the current speed.
    ///
    /// With smoothing enabled the value is replaced at the next poll.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpeed` if `speed` is not strictly positive.
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        check_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    /// Get the current speed scalar.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the cruise speed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpeedBounds` if `speed` is below the minimum speed.
    pub fn set_max_speed(&mut self, speed: f32) -> Result<()> {
        self.constraints.speed = self.constraints.speed.with_max(speed)?;
        Ok(())
    }

    /// Get the cruise speed.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.constraints.speed.max
    }

    /// Set the speed used at both ends of a move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMinSpeed` if `speed <= 0`, or `InvalidSpeedBounds` if it
    /// exceeds the maximum speed.
    pub fn set_min_speed(&mut self, speed: f32) -> Result<()> {
        self.constraints.speed = self.constraints.speed.with_min(speed)?;
        Ok(())
    }

    /// Get the end-of-move speed.
    #[inline]
    pub fn min_speed(&self) -> f32 {
        self.constraints.speed.min
    }

    /// Degrees moved per step.
    #[inline]
    pub fn degrees_per_step(&self) -> f32 {
        self.constraints.degrees_per_step
    }

    /// Pulse period at a speed of 1.0.
    #[inline]
    pub fn min_pulse_period_us(&self) -> u32 {
        self.constraints.min_pulse_period_us
    }

    /// Time between step line transitions at the current speed.
    #[inline]
    pub fn pulse_period_us(&self) -> u32 {
        pulse_period_us(self.constraints.min_pulse_period_us, self.speed)
    }

    /// Step line state.
    #[inline]
    pub fn state(&self) -> PulseState {
        self.state
    }

    /// Direction of the current (or last) move.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Speed profile of the current move.
    pub fn ramp_profile(&self) -> RampProfile {
        RampProfile::new(
            self.angles.move_start(),
            self.angles.desired(),
            self.constraints.ease_region,
            self.constraints.speed,
        )
    }

    /// Ramp phase at the current angle.
    pub fn ramp_phase(&self) -> MotionPhase {
        if self.stopped {
            MotionPhase::Complete
        } else {
            self.ramp_profile().phase_at(self.angles.current())
        }
    }
}
