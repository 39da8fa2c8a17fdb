//! Menu screens

use super::options::{
    ANGLE_CUSTOM_INDEX, AXIS_ITEMS, AXIS_OPTION_ITEMS, CUSTOM_ANGLE_MAX_INDEX, HOME_ITEMS,
    RPM_OPTIONS,
};

/// Every screen the panel can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Top-level menu
    Home,
    /// Spindle speed list
    MotorSpeed,
    /// Choose stepper axis 1 or 2
    StepperPicker,
    /// Origin or angle for the selected axis
    StepperOptions,
    /// Jog the selected axis and mark its origin
    SetOrigin,
    /// Preset angles plus "Custom"
    AnglePreset,
    /// Free angle in 5 degree steps
    CustomAngle,
    /// Read-only summary of the committed settings
    Monitor,
}

impl Screen {
    /// All screens
    pub const ALL: [Screen; 8] = [
        Screen::Home,
        Screen::MotorSpeed,
        Screen::StepperPicker,
        Screen::StepperOptions,
        Screen::SetOrigin,
        Screen::AnglePreset,
        Screen::CustomAngle,
        Screen::Monitor,
    ];

    /// Highest valid cursor index, or `None` for screens without a cursor
    pub fn bound(self) -> Option<u8> {
        let max = match self {
            Screen::Home => HOME_ITEMS.len() - 1,
            Screen::MotorSpeed => RPM_OPTIONS.len() - 1,
            Screen::StepperPicker => AXIS_ITEMS.len() - 1,
            Screen::StepperOptions => AXIS_OPTION_ITEMS.len() - 1,
            Screen::AnglePreset => ANGLE_CUSTOM_INDEX as usize,
            Screen::CustomAngle => CUSTOM_ANGLE_MAX_INDEX as usize,
            Screen::SetOrigin | Screen::Monitor => return None,
        };
        Some(max as u8)
    }

    /// Screen that Back returns to
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Home => None,
            Screen::MotorSpeed | Screen::StepperPicker | Screen::Monitor => Some(Screen::Home),
            Screen::StepperOptions => Some(Screen::StepperPicker),
            Screen::SetOrigin | Screen::AnglePreset => Some(Screen::StepperOptions),
            Screen::CustomAngle => Some(Screen::AnglePreset),
        }
    }

    /// Whether this screen works on the selected axis
    pub fn needs_axis(self) -> bool {
        matches!(
            self,
            Screen::StepperOptions | Screen::SetOrigin | Screen::AnglePreset | Screen::CustomAngle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Screen::Home.bound(), Some(2));
        assert_eq!(Screen::MotorSpeed.bound(), Some(17));
        assert_eq!(Screen::StepperPicker.bound(), Some(1));
        assert_eq!(Screen::StepperOptions.bound(), Some(1));
        assert_eq!(Screen::AnglePreset.bound(), Some(5));
        assert_eq!(Screen::CustomAngle.bound(), Some(72));
        assert_eq!(Screen::SetOrigin.bound(), None);
        assert_eq!(Screen::Monitor.bound(), None);
    }

    #[test]
    fn test_every_screen_but_home_has_parent() {
        for screen in Screen::ALL {
            assert_eq!(screen.parent().is_none(), screen == Screen::Home);
        }
    }

    #[test]
    fn test_axis_screens() {
        assert!(Screen::SetOrigin.needs_axis());
        assert!(!Screen::MotorSpeed.needs_axis());
        assert!(!Screen::Monitor.needs_axis());
    }
}
