//! Board-agnostic core logic for the Stepdial control panel
//!
//! This crate contains all panel logic that does not depend on
//! specific hardware implementations:
//!
//! - Quadrature decoding of the rotary encoder
//! - Debounced push-button presses
//! - The confirmation flash timer
//! - The menu navigation state machine and the origin-set mode
//! - Projection of the menu state onto display draw primitives
//! - The per-tick controller tying it all together
//! - Configuration types and the `panel.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod log;

pub mod config;
pub mod controller;
pub mod feedback;
pub mod input;
pub mod menu;
pub mod render;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{Controller, InputLevels, TickReport};
