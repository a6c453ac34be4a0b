//! Step line state machine.

use embedded_hal::digital::PinState;

/// Where the controller is within a step pulse.
///
/// Each physical step is two transitions: `PulseLow -> PulseHigh` raises the
/// step line, `PulseHigh -> PulseLow` lowers it and completes the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseState {
    /// At target with the step line low.
    #[default]
    Idle,
    /// Step line asserted; the step completes on the next transition.
    PulseHigh,
    /// Moving with the step line low.
    PulseLow,
}

impl PulseState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            PulseState::Idle => "Idle",
            PulseState::PulseHigh => "PulseHigh",
            PulseState::PulseLow => "PulseLow",
        }
    }

    /// Level the step line carries in this state.
    #[inline]
    pub fn step_level(self) -> PinState {
        match self {
            PulseState::PulseHigh => PinState::High,
            PulseState::Idle | PulseState::PulseLow => PinState::Low,
        }
    }

    /// Target reached. A pulse in flight keeps its high level until the next
    /// move lowers it.
    #[inline]
    pub(crate) fn settle(self) -> Self {
        match self {
            PulseState::PulseHigh => PulseState::PulseHigh,
            PulseState::Idle | PulseState::PulseLow => PulseState::Idle,
        }
    }

    /// Target left behind; start pulsing from a low line.
    #[inline]
    pub(crate) fn wake(self) -> Self {
        match self {
            PulseState::Idle => PulseState::PulseLow,
            other => other,
        }
    }

    /// Next state once a pulse period has elapsed.
    #[inline]
    pub(crate) fn toggle(self) -> Self {
        match self {
            PulseState::PulseHigh => PulseState::PulseLow,
            PulseState::Idle | PulseState::PulseLow => PulseState::PulseHigh,
        }
    }
}
