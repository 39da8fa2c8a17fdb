//! Debounced Button Source
//!
//! Turns the three raw active-low button levels into press events.
//!
//! Two policies are available through [`DebounceMode`]:
//!
//! - `Guard`: a low sample counts as a press if that button has never been
//!   accepted, or if the guard interval has elapsed since its last accepted
//!   press. The loop is never stalled. A held button repeats once per guard
//!   interval.
//! - `Stall`: every low sample counts as a press, and the caller is expected
//!   to stall the whole loop for the guard interval after each one.

use super::events::{Button, PressEvent};
use crate::config::{DebounceMode, TimingConfig};
use crate::log::log_trace;

/// Per-button guard tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    /// Timestamp of the last accepted press
    last_accept_ms: Option<u32>,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            last_accept_ms: None,
        }
    }

    /// Evaluate one sample under the guard policy
    ///
    /// `pressed` is the logical state (already inverted from the active-low
    /// pin level).
    pub fn accept(&mut self, pressed: bool, now_ms: u32, guard_ms: u32) -> bool {
        if !pressed {
            return false;
        }

        let ready = match self.last_accept_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= guard_ms,
        };

        if ready {
            self.last_accept_ms = Some(now_ms);
        }
        ready
    }
}

/// The three panel buttons behind one debounce policy
#[derive(Debug, Clone)]
pub struct ButtonSource {
    debouncers: [Debouncer; 3],
    mode: DebounceMode,
    guard_ms: u32,
}

impl ButtonSource {
    /// Create a source from the timing configuration
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            debouncers: [Debouncer::new(); 3],
            mode: timing.debounce_mode,
            guard_ms: timing.debounce_ms,
        }
    }

    /// Poll one button
    ///
    /// `level` is the raw pin level; the buttons are active-low, so `false`
    /// means pressed.
    pub fn poll(&mut self, button: Button, level: bool, now_ms: u32) -> Option<PressEvent> {
        let pressed = !level;

        let accepted = match self.mode {
            DebounceMode::Guard => {
                self.debouncers[button.index()].accept(pressed, now_ms, self.guard_ms)
            }
            DebounceMode::Stall => pressed,
        };

        if !accepted {
            return None;
        }

        log_trace!("Press {}", button);
        Some(PressEvent { button })
    }

    /// Loop stall owed for each accepted press
    ///
    /// Zero in guard mode.
    pub fn stall_per_press_ms(&self) -> u32 {
        match self.mode {
            DebounceMode::Guard => 0,
            DebounceMode::Stall => self.guard_ms,
        }
    }

    pub fn mode(&self) -> DebounceMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: bool = false;
    const HIGH: bool = true;

    fn timing(mode: DebounceMode) -> TimingConfig {
        TimingConfig {
            debounce_mode: mode,
            ..TimingConfig::default()
        }
    }

    #[test]
    fn test_released_button_never_fires() {
        let mut source = ButtonSource::new(&timing(DebounceMode::Guard));
        for now in (0..1000).step_by(25) {
            assert!(source.poll(Button::Confirm, HIGH, now).is_none());
        }
    }

    #[test]
    fn test_first_press_accepted_immediately() {
        let mut source = ButtonSource::new(&timing(DebounceMode::Guard));
        assert_eq!(
            source.poll(Button::Back, LOW, 10),
            Some(PressEvent {
                button: Button::Back
            })
        );
    }

    #[test]
    fn test_bounce_inside_guard_rejected() {
        let mut source = ButtonSource::new(&timing(DebounceMode::Guard));
        assert!(source.poll(Button::Confirm, LOW, 0).is_some());
        assert!(source.poll(Button::Confirm, HIGH, 25).is_none());
        assert!(source.poll(Button::Confirm, LOW, 50).is_none());
        assert!(source.poll(Button::Confirm, LOW, 149).is_none());
        assert!(source.poll(Button::Confirm, LOW, 150).is_some());
    }

    #[test]
    fn test_held_button_repeats_per_guard() {
        let mut source = ButtonSource::new(&timing(DebounceMode::Guard));
        let mut presses = 0;
        // Held for 500ms sampled every 25ms: accepts at 0, 150, 300, 450
        for now in (0..500).step_by(25) {
            if source.poll(Button::SetAsOrigin, LOW, now).is_some() {
                presses += 1;
            }
        }
        assert_eq!(presses, 4);
    }

    #[test]
    fn test_buttons_tracked_independently() {
        let mut source = ButtonSource::new(&timing(DebounceMode::Guard));
        assert!(source.poll(Button::Confirm, LOW, 0).is_some());
        assert!(source.poll(Button::Back, LOW, 25).is_some());
        assert!(source.poll(Button::Confirm, LOW, 25).is_none());
    }

    #[test]
    fn test_guard_survives_timer_wrap() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.accept(true, u32::MAX - 50, 150));
        assert!(!debouncer.accept(true, 50, 150));
        assert!(debouncer.accept(true, 100, 150));
    }

    #[test]
    fn test_stall_mode_accepts_every_low_sample() {
        let mut source = ButtonSource::new(&timing(DebounceMode::Stall));
        assert!(source.poll(Button::Confirm, LOW, 0).is_some());
        assert!(source.poll(Button::Confirm, LOW, 1).is_some());
        assert!(source.poll(Button::Confirm, HIGH, 2).is_none());
        assert_eq!(source.stall_per_press_ms(), 150);
    }

    #[test]
    fn test_guard_mode_never_stalls() {
        let source = ButtonSource::new(&timing(DebounceMode::Guard));
        assert_eq!(source.stall_per_press_ms(), 0);
        assert_eq!(source.mode(), DebounceMode::Guard);
    }
}
