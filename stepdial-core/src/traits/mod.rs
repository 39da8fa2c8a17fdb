//! Collaborator traits
//!
//! These traits define the interface between the panel logic and the
//! hardware-specific display and actuator implementations.

pub mod actuator;

pub use actuator::{ActuatorAdapter, Axis, Direction};
pub use stepdial_display::{DisplayBackend, DisplayError};
