//! Input events produced by the decoder and the button source

use crate::traits::Direction;

/// The three panel push-buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Encoder push / select
    Confirm,
    /// Return to the parent screen
    Back,
    /// Mark the jogged position as the axis origin
    SetAsOrigin,
}

impl Button {
    /// All buttons in polling order
    pub const ALL: [Button; 3] = [Button::Confirm, Button::Back, Button::SetAsOrigin];

    /// Zero-based index for per-button arrays
    pub const fn index(self) -> usize {
        match self {
            Button::Confirm => 0,
            Button::Back => 1,
            Button::SetAsOrigin => 2,
        }
    }
}

/// One full mechanical detent of the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetentEvent {
    pub direction: Direction,
}

/// A debounced button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    pub button: Button,
}

/// Any clean input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    Detent(DetentEvent),
    Press(PressEvent),
}

impl From<DetentEvent> for InputEvent {
    fn from(event: DetentEvent) -> Self {
        InputEvent::Detent(event)
    }
}

impl From<PressEvent> for InputEvent {
    fn from(event: PressEvent) -> Self {
        InputEvent::Press(event)
    }
}
