//! Motion module for axis-stepper.
//!
//! Provides the angle-based speed ramp and step pulse timing.

mod profile;
mod pulse;

pub use profile::{compute_speed, Direction, MotionPhase, RampProfile, RampRegime};
pub use pulse::{pulse_period_us, PulseTimer};
