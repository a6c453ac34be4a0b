//! Unit test harness for axis-stepper.
//!
//! This module organizes configuration tests that exercise the public API.

mod config_parsing;
mod config_validation;
