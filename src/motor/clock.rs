//! Monotonic microsecond clock.

/// Source of the current time in microseconds.
///
/// The count is expected to wrap at `u32::MAX`, like most MCU tick counters;
/// the controller recovers from a single wrap between two polls.
pub trait MicrosClock {
    /// Microseconds since a clock-specific reference point.
    fn now_micros(&self) -> u32;
}

impl<F> MicrosClock for F
where
    F: Fn() -> u32,
{
    fn now_micros(&self) -> u32 {
        self()
    }
}

/// A clock backed by the operating system's monotonic clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock reading zero now.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl MicrosClock for StdClock {
    fn now_micros(&self) -> u32 {
        // Truncation wraps the count modulo 2^32.
        self.origin.elapsed().as_micros() as u32
    }
}
