//! Display backend trait
//!
//! Defines the draw primitives every render target must provide.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Display backend trait
///
/// The render adapter consumed by the menu core. Coordinates are in pixels
/// with the origin at the top-left corner. Drawing goes to a back buffer and
/// only becomes visible on [`DisplayBackend::present`].
pub trait DisplayBackend {
    /// Clear the back buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw the title bar across the top of the screen
    ///
    /// The bar is a filled strip of [`crate::TITLE_BAR_HEIGHT`] pixels with
    /// the title drawn inverted on it.
    fn draw_title_bar(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Draw the cursor marker whose top-left corner is at (`x`, `y`)
    fn draw_highlight_marker(&mut self, x: u16, y: u16) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// `inverted` draws dark text, for use on top of a filled rectangle.
    fn draw_text(&mut self, text: &str, x: u16, y: u16, inverted: bool)
        -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn draw_filled_rect(&mut self, x: u16, y: u16, width: u16, height: u16)
        -> Result<(), DisplayError>;

    /// Push the back buffer to the panel
    fn present(&mut self) -> Result<(), DisplayError>;
}

impl<T: DisplayBackend + ?Sized> DisplayBackend for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn draw_title_bar(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).draw_title_bar(text)
    }

    fn draw_highlight_marker(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        (**self).draw_highlight_marker(x, y)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: u16,
        y: u16,
        inverted: bool,
    ) -> Result<(), DisplayError> {
        (**self).draw_text(text, x, y, inverted)
    }

    fn draw_filled_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), DisplayError> {
        (**self).draw_filled_rect(x, y, width, height)
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        (**self).present()
    }
}
