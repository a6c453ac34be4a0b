//! Configuration-driven example.
//!
//! Loads two axes from TOML and runs them side by side on a simulated clock,
//! one poll per 20 microseconds, printing when each arrives.

use core::cell::Cell;

use axis_stepper::{
    config::units::Degrees,
    motor::{AxisControllerBuilder, DigitalOutputPort},
    parse_config,
};
use embedded_hal::digital::PinState;

const CONFIG: &str = r#"
[axes.pan]
name = "pan"
steps_per_revolution = 200
microsteps = 4
min_pulse_period_us = 1000
max_speed = 4.0
min_speed = 1.0
ease_region_deg = 10.0

[axes.tilt]
name = "tilt"
degrees_per_step = 0.9
min_pulse_period_us = 1500
max_speed = 3.0
min_speed = 1.0
invert_direction = true
"#;

/// Port that only counts completed steps.
#[derive(Default)]
struct CountingPort {
    steps: u32,
}

impl DigitalOutputPort for CountingPort {
    fn set_direction(&mut self, _level: PinState) -> axis_stepper::Result<()> {
        Ok(())
    }

    fn set_step(&mut self, level: PinState) -> axis_stepper::Result<()> {
        if level == PinState::Low {
            self.steps += 1;
        }
        Ok(())
    }
}

fn main() -> Result<(), axis_stepper::Error> {
    println!("=== Configuration-Driven Example ===\n");

    let config = parse_config(CONFIG)?;
    println!("Loaded configuration with {} axis(es)", config.len());

    let now = Cell::new(0u32);
    let clock = || now.get();

    let mut pan = AxisControllerBuilder::new()
        .from_config(&config, "pan")?
        .port(CountingPort::default())
        .clock(clock)
        .build()?;
    let mut tilt = AxisControllerBuilder::new()
        .from_config(&config, "tilt")?
        .port(CountingPort::default())
        .clock(clock)
        .build()?;

    for axis in [&pan, &tilt] {
        println!(
            "{}: {} deg/step, speed {}..{}, ease {} deg, reversed {}",
            axis.name(),
            axis.degrees_per_step(),
            axis.min_speed(),
            axis.max_speed(),
            axis.ease_region().0,
            axis.is_direction_reversed()
        );
    }

    pan.set_desired_angle(Degrees(45.0));
    tilt.move_by(Degrees(-30.0));

    let mut pan_done = false;
    let mut tilt_done = false;
    while !(pan_done && tilt_done) {
        now.set(now.get().wrapping_add(20));

        if !pan_done && pan.advance()? {
            pan_done = true;
            println!("pan reached {:.2} deg at t = {} us", pan.current_angle().0, now.get());
        }
        if !tilt_done && tilt.advance()? {
            tilt_done = true;
            println!("tilt reached {:.2} deg at t = {} us", tilt.current_angle().0, now.get());
        }
    }

    println!("\npan steps: {}", pan.port().steps);
    println!("tilt steps: {}", tilt.port().steps);
    println!("\n=== Example Complete ===");
    Ok(())
}
