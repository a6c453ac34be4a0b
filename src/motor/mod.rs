//! Motor module for axis-stepper.
//!
//! Provides the non-blocking axis controller and the hardware capabilities it
//! drives: a STEP/DIR output port and a microsecond clock.

mod builder;
mod clock;
mod controller;
mod port;
mod position;
mod state;

pub use builder::AxisControllerBuilder;
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::MicrosClock;
pub use controller::AxisController;
pub use port::{DigitalOutputPort, StepDirPins};
pub use position::AngleTracker;
pub use state::PulseState;
