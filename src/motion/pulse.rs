//! Step pulse timing against a wrapping microsecond clock.

/// Time between step-line transitions at a given speed.
///
/// Truncates toward zero. `speed` must be > 0; larger speeds give shorter
/// periods.
#[inline]
pub fn pulse_period_us(min_pulse_period_us: u32, speed: f32) -> u32 {
    (min_pulse_period_us as f32 / speed) as u32
}

/// Timestamp of the last step-line transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTimer {
    last_transition_us: u32,
}

impl PulseTimer {
    /// Create a timer whose last transition happened at `now_us`.
    #[inline]
    pub fn new(now_us: u32) -> Self {
        Self {
            last_transition_us: now_us,
        }
    }

    /// Account for a clock reading.
    ///
    /// A reading earlier than the last transition means the clock wrapped; the
    /// reference is moved back to zero so the elapsed time stays meaningful.
    /// Returns `true` when that happened.
    #[inline]
    pub fn observe(&mut self, now_us: u32) -> bool {
        if now_us < self.last_transition_us {
            self.last_transition_us = 0;
            true
        } else {
            false
        }
    }

    /// Microseconds since the last transition.
    #[inline]
    pub fn elapsed_us(&self, now_us: u32) -> u32 {
        now_us.saturating_sub(self.last_transition_us)
    }

    /// Whether at least `period_us` has passed since the last transition.
    #[inline]
    pub fn is_due(&self, now_us: u32, period_us: u32) -> bool {
        self.elapsed_us(now_us) >= period_us
    }

    /// Record a transition at `now_us`.
    #[inline]
    pub fn mark(&mut self, now_us: u32) {
        self.last_transition_us = now_us;
    }

    /// Timestamp of the last transition.
    #[inline]
    pub fn last_transition_us(&self) -> u32 {
        self.last_transition_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_period() {
        assert_eq!(pulse_period_us(2000, 1.0), 2000);
        assert_eq!(pulse_period_us(2000, 5.0), 400);
        assert_eq!(pulse_period_us(2000, 3.0), 666);
        assert_eq!(pulse_period_us(2000, 0.5), 4000);
    }

    #[test]
    fn test_due() {
        let mut timer = PulseTimer::new(1_000);
        assert!(!timer.is_due(1_399, 400));
        assert!(timer.is_due(1_400, 400));

        timer.mark(1_400);
        assert_eq!(timer.elapsed_us(1_500), 100);
    }

    #[test]
    fn test_wraparound_resets_reference() {
        let mut timer = PulseTimer::new(u32::MAX - 10);
        assert!(!timer.observe(u32::MAX - 5));

        assert!(timer.observe(20));
        assert_eq!(timer.last_transition_us(), 0);
        assert_eq!(timer.elapsed_us(20), 20);
    }

    #[test]
    fn test_elapsed_never_underflows() {
        let timer = PulseTimer::new(500);
        assert_eq!(timer.elapsed_us(100), 0);
    }
}
