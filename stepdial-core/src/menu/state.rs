//! Navigation state
//!
//! The single mutable aggregate behind the menu. Only the menu machine and
//! the origin session mutate it; everything else reads through the
//! accessors.

use super::options::RPM_MIN;
use super::screen::Screen;
use crate::feedback::ConfirmFlash;
use crate::log::log_debug;
use crate::traits::{Axis, Direction};

/// Current screen, cursor and committed settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) screen: Screen,
    pub(crate) cursor: u8,
    pub(crate) selected_axis: Option<Axis>,
    pub(crate) motor_speed_rpm: u16,
    pub(crate) axis_angle_deg: [u16; 2],
    pub(crate) axis_step_offset: [i32; 2],
    pub(crate) origin_running: bool,
    pub(crate) flash: ConfirmFlash,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ConfirmFlash::default())
    }
}

impl NavigationState {
    /// Power-on state: Home, cursor 0, every setting at its default
    pub fn new(flash: ConfirmFlash) -> Self {
        Self {
            screen: Screen::Home,
            cursor: 0,
            selected_axis: None,
            motor_speed_rpm: RPM_MIN,
            axis_angle_deg: [0; 2],
            axis_step_offset: [0; 2],
            origin_running: false,
            flash,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Axis picked on the stepper picker, kept until another is picked
    pub fn selected_axis(&self) -> Option<Axis> {
        self.selected_axis
    }

    pub fn motor_speed_rpm(&self) -> u16 {
        self.motor_speed_rpm
    }

    pub fn axis_angle_deg(&self, axis: Axis) -> u16 {
        self.axis_angle_deg[axis.index()]
    }

    /// Signed steps jogged since the axis origin was last set
    pub fn axis_step_offset(&self, axis: Axis) -> i32 {
        self.axis_step_offset[axis.index()]
    }

    pub fn origin_running(&self) -> bool {
        self.origin_running
    }

    pub fn flash(&self) -> &ConfirmFlash {
        &self.flash
    }

    /// Switch screen with the cursor back at 0
    pub(crate) fn enter(&mut self, screen: Screen) {
        log_debug!("Screen {} -> {}", self.screen, screen);
        self.screen = screen;
        self.cursor = 0;
    }

    /// Move the cursor one row, wrapping within the screen bound
    ///
    /// Returns false on screens without a cursor.
    pub(crate) fn move_cursor(&mut self, direction: Direction) -> bool {
        let Some(bound) = self.screen.bound() else {
            return false;
        };
        let span = bound as i16 + 1;
        let next = (self.cursor as i16 + direction.delta() as i16).rem_euclid(span);
        self.cursor = next as u8;
        true
    }
}
