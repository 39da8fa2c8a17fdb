//! Render adapter traits and shared frame types for Stepdial
//!
//! This crate provides:
//! - `DisplayBackend` trait: the draw primitives the menu core emits
//! - `DrawCommand` enum: one recorded draw primitive
//! - `Frame`: a backend that records draw commands instead of rasterizing them
//! - Panel layout constants for the 128x64 monochrome OLED
//!
//! # Architecture
//!
//! The menu core never touches pixels. Each screen is projected into a short
//! sequence of draw primitives (clear, title bar, text, highlight marker,
//! filled rectangle, present) and handed to whatever implements
//! `DisplayBackend`:
//!
//! - **Direct displays** (SSD1306 on the RP2040 I2C bus): the firmware
//!   implements `DisplayBackend` on top of `embedded-graphics`.
//!
//! - **Recorded frames**: `Frame` captures the sequence so host tests can
//!   compare and inspect it.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod frame;
pub mod layout;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use frame::{DrawCommand, Frame, FrameText, MAX_FRAME_COMMANDS, MAX_TEXT_LEN};
pub use layout::{DISPLAY_HEIGHT, DISPLAY_WIDTH, TITLE_BAR_HEIGHT};
