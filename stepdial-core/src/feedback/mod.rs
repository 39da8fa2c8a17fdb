//! Visual feedback timers

pub mod flash;

pub use flash::{ConfirmFlash, FlashTarget};
