//! Basic axis control example.
//!
//! Builds a controller by hand, commands a quarter turn and polls it against
//! the system clock until it arrives, then prints the pulse count.
//!
//! The pins are software stand-ins, so this runs without hardware.

use axis_stepper::{
    config::units::Degrees,
    motor::{AxisControllerBuilder, StdClock, StepDirPins},
};

/// Mock output pin that counts rising edges.
struct MockPin {
    state: bool,
    rising_edges: u32,
}

impl MockPin {
    fn new() -> Self {
        Self {
            state: false,
            rising_edges: 0,
        }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            self.rising_edges += 1;
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn main() {
    println!("=== Basic Axis Control Example ===\n");

    let mut axis = AxisControllerBuilder::<StepDirPins<MockPin, MockPin>, _>::new()
        .name("demo_axis")
        .pins(MockPin::new(), MockPin::new())
        .clock(StdClock::new())
        .degrees_per_step(1.8)
        .min_pulse_period_us(2000)
        .max_speed(5.0)
        .min_speed(1.0)
        .ease_region(Degrees(5.0))
        .build()
        .expect("Failed to build axis");

    println!("Axis created: {}", axis.name());
    println!("Initial angle: {} degrees", axis.current_angle().0);

    axis.set_desired_angle(Degrees(90.0));
    let profile = axis.ramp_profile();
    println!("\n=== Move ===");
    println!("Target: {} degrees", axis.desired_angle().0);
    println!("Regime: {:?}", profile.regime());
    println!("Start speed: {}", profile.speed_at(profile.start));
    println!("Cruise speed: {}", axis.max_speed());

    let mut last_phase = None;
    loop {
        let arrived = axis.advance().expect("pin write failed");
        let phase = axis.ramp_phase();
        if last_phase != Some(phase) {
            println!(
                "{:?} at {:.1} degrees (pulse period {} us)",
                phase,
                axis.current_angle().0,
                axis.pulse_period_us()
            );
            last_phase = Some(phase);
        }
        if arrived {
            break;
        }
    }

    let (pins, _clock) = axis.release();
    let (step_pin, dir_pin) = pins.release();

    println!("\n=== Result ===");
    println!("Step pulses: {}", step_pin.rising_edges);
    println!("Direction pin high: {}", dir_pin.state);
    println!("\n=== Example Complete ===");
}
