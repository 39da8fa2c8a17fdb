//! Events consumed by the menu machine

use crate::input::{Button, InputEvent};
use crate::traits::Direction;

/// Menu events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEvent {
    /// One encoder detent
    Rotate(Direction),
    /// Confirm / select button
    Confirm,
    /// Back button
    Back,
    /// Set-as-origin button; only meaningful on the SetOrigin screen
    SetAsOrigin,
}

impl From<InputEvent> for MenuEvent {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Detent(detent) => MenuEvent::Rotate(detent.direction),
            InputEvent::Press(press) => match press.button {
                Button::Confirm => MenuEvent::Confirm,
                Button::Back => MenuEvent::Back,
                Button::SetAsOrigin => MenuEvent::SetAsOrigin,
            },
        }
    }
}
