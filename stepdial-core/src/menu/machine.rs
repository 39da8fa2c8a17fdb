//! Menu Navigation State Machine
//!
//! Consumes rotate/confirm/back/set-origin events and flash expiries,
//! updates the navigation state and forwards intents to the actuator.
//! Rendering is left to the caller, which is told through [`Reaction`]
//! whether anything visible changed.

use super::events::MenuEvent;
use super::options::{
    angle_preset_at, custom_angle_at, rpm_at, ANGLE_CUSTOM_INDEX, AXIS_ITEMS, AXIS_OPTION_ITEMS,
    HOME_ITEMS,
};
use super::origin::OriginSession;
use super::screen::Screen;
use super::state::NavigationState;
use crate::feedback::{ConfirmFlash, FlashTarget};
use crate::log::log_debug;
use crate::traits::{ActuatorAdapter, Direction};

/// Outcome of one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reaction {
    /// State changed; the screen must be re-rendered
    Redraw,
    /// Event had no effect on this screen
    Ignored,
}

impl Reaction {
    pub fn needs_redraw(self) -> bool {
        self == Reaction::Redraw
    }
}

/// The menu state machine
#[derive(Debug, Clone)]
pub struct MenuMachine {
    state: NavigationState,
}

impl Default for MenuMachine {
    fn default() -> Self {
        Self::new(ConfirmFlash::default())
    }
}

impl MenuMachine {
    /// Create the machine in its power-on state
    pub fn new(flash: ConfirmFlash) -> Self {
        Self {
            state: NavigationState::new(flash),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Apply one event
    pub fn handle<A: ActuatorAdapter>(
        &mut self,
        event: MenuEvent,
        now_ms: u32,
        actuator: &mut A,
    ) -> Reaction {
        match event {
            MenuEvent::Rotate(direction) => self.rotate(direction, actuator),
            MenuEvent::Confirm => self.confirm(now_ms, actuator),
            MenuEvent::Back => self.back(actuator),
            MenuEvent::SetAsOrigin => self.set_as_origin(actuator),
        }
    }

    /// Advance the flash timer
    pub fn tick(&mut self, now_ms: u32) -> Reaction {
        if self.state.flash.tick(now_ms) {
            Reaction::Redraw
        } else {
            Reaction::Ignored
        }
    }

    fn rotate<A: ActuatorAdapter>(&mut self, direction: Direction, actuator: &mut A) -> Reaction {
        if self.state.screen == Screen::SetOrigin {
            return match OriginSession::attach(&mut self.state) {
                Some(mut session) => {
                    session.jog(direction, actuator);
                    Reaction::Redraw
                }
                None => Reaction::Ignored,
            };
        }

        if self.state.move_cursor(direction) {
            Reaction::Redraw
        } else {
            Reaction::Ignored
        }
    }

    fn confirm<A: ActuatorAdapter>(&mut self, now_ms: u32, actuator: &mut A) -> Reaction {
        let state = &mut self.state;
        let cursor = state.cursor;

        match state.screen {
            Screen::Home => {
                let Some(item) = HOME_ITEMS.get(cursor as usize) else {
                    return Reaction::Ignored;
                };
                state.enter(item.target);
            }
            Screen::MotorSpeed => {
                let Some(rpm) = rpm_at(cursor) else {
                    return Reaction::Ignored;
                };
                log_debug!("Motor speed {} rpm", rpm);
                state.motor_speed_rpm = rpm;
                actuator.set_motor_speed(rpm);
                state
                    .flash
                    .start(FlashTarget::Index(cursor), Screen::MotorSpeed, now_ms);
            }
            Screen::StepperPicker => {
                let Some(&(_, axis)) = AXIS_ITEMS.get(cursor as usize) else {
                    return Reaction::Ignored;
                };
                state.selected_axis = Some(axis);
                state.enter(Screen::StepperOptions);
            }
            Screen::StepperOptions => {
                let Some(item) = AXIS_OPTION_ITEMS.get(cursor as usize) else {
                    return Reaction::Ignored;
                };
                if state.selected_axis.is_none() {
                    return Reaction::Ignored;
                }
                if item.target == Screen::SetOrigin {
                    state.origin_running = false;
                }
                state.enter(item.target);
            }
            Screen::SetOrigin => {
                let Some(mut session) = OriginSession::attach(state) else {
                    return Reaction::Ignored;
                };
                session.toggle_run(actuator);
            }
            Screen::AnglePreset => {
                let Some(axis) = state.selected_axis else {
                    return Reaction::Ignored;
                };
                if let Some(angle) = angle_preset_at(cursor) {
                    log_debug!("Axis {} angle {} deg", axis.number(), angle);
                    state.axis_angle_deg[axis.index()] = angle;
                    state
                        .flash
                        .start(FlashTarget::Index(cursor), Screen::AnglePreset, now_ms);
                } else if cursor == ANGLE_CUSTOM_INDEX {
                    state.enter(Screen::CustomAngle);
                } else {
                    return Reaction::Ignored;
                }
            }
            Screen::CustomAngle => {
                let Some(axis) = state.selected_axis else {
                    return Reaction::Ignored;
                };
                let angle = custom_angle_at(cursor);
                log_debug!("Axis {} angle {} deg", axis.number(), angle);
                state.axis_angle_deg[axis.index()] = angle;
                state
                    .flash
                    .start(FlashTarget::Custom, Screen::CustomAngle, now_ms);
            }
            Screen::Monitor => return Reaction::Ignored,
        }

        Reaction::Redraw
    }

    fn back<A: ActuatorAdapter>(&mut self, actuator: &mut A) -> Reaction {
        if let Some(session) = OriginSession::attach(&mut self.state) {
            session.abandon(actuator);
            return Reaction::Redraw;
        }

        match self.state.screen.parent() {
            Some(parent) => {
                self.state.enter(parent);
                Reaction::Redraw
            }
            None => Reaction::Ignored,
        }
    }

    fn set_as_origin<A: ActuatorAdapter>(&mut self, actuator: &mut A) -> Reaction {
        match OriginSession::attach(&mut self.state) {
            Some(session) => {
                session.set_as_origin(actuator);
                Reaction::Redraw
            }
            None => Reaction::Ignored,
        }
    }
}
