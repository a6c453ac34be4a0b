//! Angle-based speed ramp.
//!
//! Speed is a function of where the axis is along the current move, not of
//! elapsed time. Long moves get a trapezoid: a linear ramp of `ease_region`
//! degrees at each end with a flat cruise at `max_speed` between them. Moves
//! shorter than the ease region get a triangle peaking at the midpoint.
//!
//! ```text
//!  speed
//!   max |    ______________________
//!       |   /                      \
//!   min |  /                        \
//!       +--+------------------------+---> angle
//!        start                     end
//! ```

use embedded_hal::digital::PinState;
use libm::fabsf;

use crate::config::units::Degrees;
use crate::config::SpeedLimits;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (increasing angle, direction pin high).
    Clockwise,
    /// Counter-clockwise (decreasing angle, direction pin low).
    CounterClockwise,
}

impl Direction {
    /// Direction that takes `from` toward `to`.
    ///
    /// Equal values resolve to counter-clockwise.
    #[inline]
    pub fn toward(from: f32, to: f32) -> Self {
        if from < to {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Logic level the direction pin carries for this direction.
    #[inline]
    pub fn pin_level(self) -> PinState {
        match self {
            Direction::Clockwise => PinState::High,
            Direction::CounterClockwise => PinState::Low,
        }
    }
}

/// Current phase of a move, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// On the leading ramp.
    Accelerating,
    /// On the flat top of a trapezoid.
    Cruising,
    /// On the trailing ramp.
    Decelerating,
    /// At or beyond the end of the move.
    Complete,
}

/// Shape of the speed profile for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampRegime {
    /// Move shorter than the ease region: ramp up to the midpoint, then down.
    Triangular,
    /// Ramp, cruise, ramp.
    Trapezoidal,
}

/// Speed profile of a single move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampProfile {
    /// Angle at which the move was commanded.
    pub start: Degrees,
    /// Target angle.
    pub end: Degrees,
    /// Width of each ramp.
    pub ease_region: Degrees,
    /// Speed bounds.
    pub speed: SpeedLimits,
}

impl RampProfile {
    /// Create a profile for a move from `start` to `end`.
    pub fn new(start: Degrees, end: Degrees, ease_region: Degrees, speed: SpeedLimits) -> Self {
        Self {
            start,
            end,
            ease_region,
            speed,
        }
    }

    /// Signed length of the move.
    #[inline]
    pub fn travel(&self) -> Degrees {
        self.end - self.start
    }

    /// Which profile shape applies to this move.
    #[inline]
    pub fn regime(&self) -> RampRegime {
        if self.travel().abs().0 < self.ease_region.0 {
            RampRegime::Triangular
        } else {
            RampRegime::Trapezoidal
        }
    }

    /// Speed at a position along the move.
    ///
    /// Always within `[speed.min, speed.max]`, so never zero for valid limits.
    pub fn speed_at(&self, position: Degrees) -> f32 {
        let travelled = fabsf(position.0 - self.start.0);
        let to_go = fabsf(self.end.0 - position.0);
        let span = self.speed.span();

        let raw = match self.regime() {
            RampRegime::Triangular => {
                let half = fabsf(self.travel().0) / 2.0;
                if half <= 0.0 {
                    return self.speed.min;
                }
                let slope = span / half;
                if travelled <= half {
                    slope * travelled + self.speed.min
                } else {
                    slope * to_go + self.speed.min
                }
            }
            RampRegime::Trapezoidal => {
                let ease = self.ease_region.0;
                if travelled < ease {
                    span / ease * travelled + self.speed.min
                } else if to_go < ease {
                    span / ease * to_go + self.speed.min
                } else {
                    self.speed.max
                }
            }
        };

        self.speed.clamp(raw)
    }

    /// Phase of the move at a position.
    pub fn phase_at(&self, position: Degrees) -> MotionPhase {
        let length = fabsf(self.travel().0);
        let progress = (position.0 - self.start.0) * Direction::toward(self.start.0, self.end.0).sign();
        if length <= 0.0 || progress >= length {
            return MotionPhase::Complete;
        }

        let travelled = fabsf(position.0 - self.start.0);
        let to_go = fabsf(self.end.0 - position.0);

        match self.regime() {
            RampRegime::Triangular => {
                if travelled <= length / 2.0 {
                    MotionPhase::Accelerating
                } else {
                    MotionPhase::Decelerating
                }
            }
            RampRegime::Trapezoidal => {
                let ease = self.ease_region.0;
                if travelled < ease {
                    MotionPhase::Accelerating
                } else if to_go < ease {
                    MotionPhase::Decelerating
                } else {
                    MotionPhase::Cruising
                }
            }
        }
    }
}

/// Speed at `position` for a move from `move_start` to `move_end`.
///
/// Stateless form of [`RampProfile::speed_at`]. `min_speed` must be > 0 for
/// the result to be usable as a pulse period divisor.
pub fn compute_speed(
    position: Degrees,
    move_start: Degrees,
    move_end: Degrees,
    ease_region: Degrees,
    min_speed: f32,
    max_speed: f32,
) -> f32 {
    let speed = SpeedLimits {
        min: min_speed,
        max: max_speed,
    };
    RampProfile::new(move_start, move_end, ease_region, speed).speed_at(position)
}
