//! Render projection
//!
//! Maps the navigation state onto display draw primitives. Rendering only
//! reads the state, so drawing the same state twice gives the same command
//! sequence.

pub mod screens;

use stepdial_display::{DisplayBackend, DisplayError};

use crate::menu::NavigationState;

/// Draw one complete frame for the current screen
///
/// Emits `clear`, the title bar, the screen body and `present`, in that
/// order. Stops at the first backend error.
pub fn render<B: DisplayBackend + ?Sized>(
    state: &NavigationState,
    backend: &mut B,
) -> Result<(), DisplayError> {
    backend.clear()?;
    backend.draw_title_bar(&screens::title(state))?;
    screens::body(state, backend)?;
    backend.present()
}
