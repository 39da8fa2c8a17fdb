//! Recorded draw-command frames
//!
//! A `Frame` is a `DisplayBackend` that stores the primitives it receives
//! instead of drawing them. Two renders of the same menu state produce equal
//! frames.

use heapless::{String, Vec};

use crate::backend::{DisplayBackend, DisplayError};

/// Maximum characters kept per text command
pub const MAX_TEXT_LEN: usize = 24;

/// Maximum draw commands per frame
pub const MAX_FRAME_COMMANDS: usize = 24;

/// Text payload of a draw command
pub type FrameText = String<MAX_TEXT_LEN>;

/// One draw primitive
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    Clear,
    TitleBar(FrameText),
    HighlightMarker {
        x: u16,
        y: u16,
    },
    Text {
        text: FrameText,
        x: u16,
        y: u16,
        inverted: bool,
    },
    FilledRect {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
    Present,
}

/// Recording backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    commands: Vec<DrawCommand, MAX_FRAME_COMMANDS>,
    overflowed: bool,
}

impl Frame {
    /// Create an empty frame
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            overflowed: false,
        }
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check if commands were dropped because the frame was full
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Forget all recorded commands
    pub fn reset(&mut self) {
        self.commands.clear();
        self.overflowed = false;
    }

    /// Iterate over the text of every text command
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Check if any text command contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Title of the last title bar drawn
    pub fn title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::TitleBar(text) => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, cmd: DrawCommand) -> Result<(), DisplayError> {
        if self.commands.push(cmd).is_err() {
            self.overflowed = true;
            return Err(DisplayError::BufferOverflow);
        }
        Ok(())
    }
}

/// Copy `text` into a fixed-capacity string, truncating on a char boundary
fn to_frame_text(text: &str) -> FrameText {
    let mut out = FrameText::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl DisplayBackend for Frame {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.record(DrawCommand::Clear)
    }

    fn draw_title_bar(&mut self, text: &str) -> Result<(), DisplayError> {
        self.record(DrawCommand::TitleBar(to_frame_text(text)))
    }

    fn draw_highlight_marker(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        self.record(DrawCommand::HighlightMarker { x, y })
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: u16,
        y: u16,
        inverted: bool,
    ) -> Result<(), DisplayError> {
        self.record(DrawCommand::Text {
            text: to_frame_text(text),
            x,
            y,
            inverted,
        })
    }

    fn draw_filled_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), DisplayError> {
        self.record(DrawCommand::FilledRect {
            x,
            y,
            width,
            height,
        })
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.record(DrawCommand::Present)
    }
}
