//! SSD1306 display backend
//!
//! Draws into the driver's frame buffer and flushes it over I2C on
//! `present`. Text uses the 6x10 mono font the layout is measured in.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplayConfig, DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};
use stepdial_display::layout::{
    DISPLAY_WIDTH, MARKER_HEIGHT, MARKER_WIDTH, TITLE_BAR_HEIGHT, TITLE_INSET,
};
use stepdial_display::{DisplayBackend, DisplayError};

type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered SSD1306 behind the panel's draw primitives
pub struct Ssd1306Backend<I2C> {
    display: Display<I2C>,
    ready: bool,
}

impl<I2C: I2c> Ssd1306Backend<I2C> {
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self {
            display,
            ready: false,
        }
    }

    /// Send the controller init sequence
    ///
    /// Until this succeeds every draw call returns
    /// [`DisplayError::NotInitialized`].
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.display
            .init()
            .map_err(|_| DisplayError::Communication)?;
        self.display.clear_buffer();
        self.ready = true;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    fn check_ready(&self) -> Result<(), DisplayError> {
        if self.ready {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    fn fill(&mut self, origin: Point, size: Size, color: BinaryColor) -> Result<(), DisplayError> {
        Rectangle::new(origin, size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn text(&mut self, text: &str, at: Point, color: BinaryColor) -> Result<(), DisplayError> {
        Text::with_baseline(text, at, text_style(color), Baseline::Top)
            .draw(&mut self.display)
            .map(|_| ())
            .map_err(|_| DisplayError::BufferOverflow)
    }
}

fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(color)
        .build()
}

fn point(x: u16, y: u16) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

impl<I2C: I2c> DisplayBackend for Ssd1306Backend<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_title_bar(&mut self, text: &str) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.fill(
            Point::zero(),
            Size::new(u32::from(DISPLAY_WIDTH), u32::from(TITLE_BAR_HEIGHT)),
            BinaryColor::On,
        )?;
        self.text(text, point(TITLE_INSET, TITLE_INSET), BinaryColor::Off)
    }

    fn draw_highlight_marker(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.fill(
            point(x, y),
            Size::new(u32::from(MARKER_WIDTH), u32::from(MARKER_HEIGHT)),
            BinaryColor::On,
        )
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: u16,
        y: u16,
        inverted: bool,
    ) -> Result<(), DisplayError> {
        self.check_ready()?;
        let color = if inverted {
            BinaryColor::Off
        } else {
            BinaryColor::On
        };
        self.text(text, point(x, y), color)
    }

    fn draw_filled_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.fill(
            point(x, y),
            Size::new(u32::from(width), u32::from(height)),
            BinaryColor::On,
        )
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.check_ready()?;
        self.display
            .flush()
            .map_err(|_| DisplayError::Communication)
    }
}
