//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in stepdial-core:
//!
//! - Step/direction stepper output over `embedded-hal` pins
//! - `PanelActuator`, the actuator adapter driving both axes

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod stepper;

pub use actuator::PanelActuator;
pub use stepper::{AxisDrive, StepDirStepper, StepperError};
