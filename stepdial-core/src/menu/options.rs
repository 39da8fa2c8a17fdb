//! Static option tables
//!
//! Shared by the transition logic and the render projection. Every cursor
//! bound is derived from the length of one of these tables.

use super::screen::Screen;
use crate::traits::Axis;

/// Slowest selectable spindle speed
pub const RPM_MIN: u16 = 800;

/// Fastest selectable spindle speed
pub const RPM_MAX: u16 = 2500;

/// Spacing between selectable speeds
pub const RPM_STEP: u16 = 100;

const RPM_COUNT: usize = ((RPM_MAX - RPM_MIN) / RPM_STEP + 1) as usize;

/// Selectable speeds, 800..=2500 in steps of 100
pub const RPM_OPTIONS: [u16; RPM_COUNT] = {
    let mut table = [0u16; RPM_COUNT];
    let mut i = 0;
    while i < RPM_COUNT {
        table[i] = RPM_MIN + RPM_STEP * i as u16;
        i += 1;
    }
    table
};

/// Angle presets in degrees; the row after the last preset is "Custom"
pub const ANGLE_PRESETS: [u16; 5] = [10, 30, 45, 90, 180];

/// Cursor index of the "Custom" row on the angle screen
pub const ANGLE_CUSTOM_INDEX: u8 = ANGLE_PRESETS.len() as u8;

/// Label of the "Custom" row
pub const ANGLE_CUSTOM_LABEL: &str = "Custom";

/// Custom angle resolution in degrees
pub const CUSTOM_ANGLE_STEP_DEG: u16 = 5;

/// Largest custom angle in degrees
pub const CUSTOM_ANGLE_MAX_DEG: u16 = 360;

/// Highest custom angle cursor index
pub const CUSTOM_ANGLE_MAX_INDEX: u8 = (CUSTOM_ANGLE_MAX_DEG / CUSTOM_ANGLE_STEP_DEG) as u8;

/// A row that leads to another screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: Screen,
}

/// Home rows
pub const HOME_ITEMS: [MenuItem; 3] = [
    MenuItem {
        label: "Motor",
        target: Screen::MotorSpeed,
    },
    MenuItem {
        label: "Stepper",
        target: Screen::StepperPicker,
    },
    MenuItem {
        label: "Monitor",
        target: Screen::Monitor,
    },
];

/// Stepper picker rows
pub const AXIS_ITEMS: [(&str, Axis); 2] = [("Stepper 1", Axis::One), ("Stepper 2", Axis::Two)];

/// Per-axis option rows
pub const AXIS_OPTION_ITEMS: [MenuItem; 2] = [
    MenuItem {
        label: "Set origin",
        target: Screen::SetOrigin,
    },
    MenuItem {
        label: "Set angle",
        target: Screen::AnglePreset,
    },
];

/// Speed at a MotorSpeed cursor position
pub fn rpm_at(index: u8) -> Option<u16> {
    RPM_OPTIONS.get(index as usize).copied()
}

/// Preset angle at an AnglePreset cursor position
///
/// `None` for the "Custom" row.
pub fn angle_preset_at(index: u8) -> Option<u16> {
    ANGLE_PRESETS.get(index as usize).copied()
}

/// Angle for a CustomAngle cursor position
pub fn custom_angle_at(index: u8) -> u16 {
    index.min(CUSTOM_ANGLE_MAX_INDEX) as u16 * CUSTOM_ANGLE_STEP_DEG
}
