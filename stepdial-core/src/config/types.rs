//! Configuration type definitions
//!
//! These types represent the panel configuration. The firmware embeds
//! `panel.toml` and parses it at boot; `build.rs` checks the same file
//! against these types through serde.

use crate::traits::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Control loop period used when nothing else is configured
pub const DEFAULT_LOOP_PERIOD_MS: u32 = 25;

/// Button guard interval
pub const DEFAULT_DEBOUNCE_MS: u32 = 150;

/// How long a confirmed choice stays highlighted
pub const DEFAULT_FLASH_MS: u32 = 300;

/// Step pulse high time
pub const DEFAULT_PULSE_WIDTH_US: u32 = 5;

/// How button presses are debounced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DebounceMode {
    /// Accept a press once the guard interval has passed since the last
    /// accepted press of that button; never stalls the loop
    #[default]
    Guard,
    /// Accept every low sample and stall the loop for the guard interval
    /// after each press
    ///
    /// All three buttons are sampled in the same tick and their presses are
    /// handled before the stall, which is reported as one total
    /// (`debounce_ms` per press). A press is never delayed behind the stall
    /// of an earlier button in the same tick.
    Stall,
}

/// Loop and UI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Control loop period (ms)
    pub loop_period_ms: u32,
    /// Button guard interval (ms)
    pub debounce_ms: u32,
    /// Confirmation flash duration (ms)
    pub flash_ms: u32,
    /// Debounce policy
    pub debounce_mode: DebounceMode,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loop_period_ms: DEFAULT_LOOP_PERIOD_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            flash_ms: DEFAULT_FLASH_MS,
            debounce_mode: DebounceMode::Guard,
        }
    }
}

/// Rotary encoder wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EncoderConfig {
    /// Swap clockwise and counter-clockwise (A and B wired the other way)
    pub reverse: bool,
}

/// Per-axis step/direction output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StepperConfig {
    /// Drive the direction pin low for clockwise
    pub invert_direction: bool,
    /// Step pulse high time (us)
    pub pulse_width_us: u32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            invert_direction: false,
            pulse_width_us: DEFAULT_PULSE_WIDTH_US,
        }
    }
}

/// `[stepper.1]` and `[stepper.2]` tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StepperTables {
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    pub axis1: StepperConfig,
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    pub axis2: StepperConfig,
}

impl StepperTables {
    /// Configuration for one axis
    pub fn get(&self, axis: Axis) -> &StepperConfig {
        match axis {
            Axis::One => &self.axis1,
            Axis::Two => &self.axis2,
        }
    }

    /// Mutable configuration for one axis
    pub fn get_mut(&mut self, axis: Axis) -> &mut StepperConfig {
        match axis {
            Axis::One => &mut self.axis1,
            Axis::Two => &mut self.axis2,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PanelConfig {
    pub timing: TimingConfig,
    pub encoder: EncoderConfig,
    pub stepper: StepperTables,
}

/// Out-of-range configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `loop_period_ms` must be 1-1000
    LoopPeriodOutOfRange,
    /// `debounce_ms` must be 0-1000
    DebounceOutOfRange,
    /// `flash_ms` must be 1-5000
    FlashDurationOutOfRange,
    /// `pulse_width_us` must be 1-1000
    PulseWidthOutOfRange(Axis),
}

impl PanelConfig {
    /// Check every value against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if !(1..=1000).contains(&t.loop_period_ms) {
            return Err(ConfigError::LoopPeriodOutOfRange);
        }
        if t.debounce_ms > 1000 {
            return Err(ConfigError::DebounceOutOfRange);
        }
        if !(1..=5000).contains(&t.flash_ms) {
            return Err(ConfigError::FlashDurationOutOfRange);
        }
        for axis in Axis::ALL {
            if !(1..=1000).contains(&self.stepper.get(axis).pulse_width_us) {
                return Err(ConfigError::PulseWidthOutOfRange(axis));
            }
        }
        Ok(())
    }
}
