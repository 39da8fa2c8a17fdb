//! Confirmation Flash Timer
//!
//! A short-lived highlight drawn over a just-committed choice.

use crate::config::DEFAULT_FLASH_MS;
use crate::menu::Screen;

/// What the flash highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashTarget {
    /// A row of the screen's option list
    Index(u8),
    /// The free-form value on the custom angle screen
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveFlash {
    target: FlashTarget,
    screen: Screen,
    started_ms: u32,
}

/// Flash timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmFlash {
    active: Option<ActiveFlash>,
    duration_ms: u32,
}

impl Default for ConfirmFlash {
    fn default() -> Self {
        Self::new(DEFAULT_FLASH_MS)
    }
}

impl ConfirmFlash {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            active: None,
            duration_ms,
        }
    }

    /// Start (or restart) the flash on `screen`
    pub fn start(&mut self, target: FlashTarget, screen: Screen, now_ms: u32) {
        self.active = Some(ActiveFlash {
            target,
            screen,
            started_ms: now_ms,
        });
    }

    /// Advance the timer
    ///
    /// Returns true exactly once, on the first call at or after the
    /// deadline. The flash is inactive afterwards.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        match self.active {
            Some(flash) if now_ms.wrapping_sub(flash.started_ms) >= self.duration_ms => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Highlighted target, if the flash belongs to `screen`
    pub fn highlight(&self, screen: Screen) -> Option<FlashTarget> {
        self.active
            .filter(|flash| flash.screen == screen)
            .map(|flash| flash.target)
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}
