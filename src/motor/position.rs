//! Angle bookkeeping for one axis.

use crate::config::units::Degrees;

/// Current, desired and move-start angles.
///
/// `move_start` is captured once per new target and anchors the speed ramp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleTracker {
    current: Degrees,
    desired: Degrees,
    move_start: Degrees,
}

impl AngleTracker {
    /// Create a tracker at rest at `initial`.
    #[inline]
    pub fn new(initial: Degrees) -> Self {
        Self {
            current: initial,
            desired: initial,
            move_start: initial,
        }
    }

    /// Best estimate of the physical angle.
    #[inline]
    pub fn current(&self) -> Degrees {
        self.current
    }

    /// Target angle.
    #[inline]
    pub fn desired(&self) -> Degrees {
        self.desired
    }

    /// Angle the axis was at when the current target was set.
    #[inline]
    pub fn move_start(&self) -> Degrees {
        self.move_start
    }

    /// Set a new target, starting the move from the current angle.
    #[inline]
    pub fn retarget(&mut self, target: Degrees) {
        self.desired = target;
        self.move_start = self.current;
    }

    /// Overwrite the current angle (recalibration). The move start is kept.
    #[inline]
    pub fn set_current(&mut self, angle: Degrees) {
        self.current = angle;
    }

    /// `current - desired`.
    #[inline]
    pub fn remaining(&self) -> Degrees {
        self.current - self.desired
    }

    /// `desired - current`.
    #[inline]
    pub fn distance_to_go(&self) -> Degrees {
        self.desired - self.current
    }

    /// Whether the current angle is within `tolerance` degrees of the target.
    #[inline]
    pub fn is_within(&self, tolerance: f32) -> bool {
        self.remaining().abs().0 <= tolerance
    }

    /// Move the current angle by `delta` degrees.
    #[inline]
    pub fn step(&mut self, delta: f32) {
        self.current = Degrees(self.current.0 + delta);
    }
}
