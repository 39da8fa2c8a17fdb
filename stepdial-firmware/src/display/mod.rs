//! OLED output
//!
//! The panel's 128x64 SSD1306 on I2C0.

mod ssd1306;

pub use self::ssd1306::Ssd1306Backend;
