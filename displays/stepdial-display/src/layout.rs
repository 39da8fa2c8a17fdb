//! Panel geometry
//!
//! SSD1306 128x64 monochrome OLED with a 6x10 font.

/// Panel width in pixels
pub const DISPLAY_WIDTH: u16 = 128;

/// Panel height in pixels
pub const DISPLAY_HEIGHT: u16 = 64;

/// Height of the filled title strip
pub const TITLE_BAR_HEIGHT: u16 = 16;

/// Title text inset from the top-left corner of the bar
pub const TITLE_INSET: u16 = 4;

/// Cursor marker size (a small filled block left of the item)
pub const MARKER_WIDTH: u16 = 6;
pub const MARKER_HEIGHT: u16 = 8;

/// Glyph cell of the panel font
pub const FONT_WIDTH: u16 = 6;
pub const FONT_HEIGHT: u16 = 10;
