//! Per-tick controller
//!
//! Owns the decoder, the button source, the menu machine and both
//! collaborators. The firmware calls [`Controller::tick`] once per loop
//! period with the sampled pin levels; the controller never blocks and
//! never fails.

use crate::config::PanelConfig;
use crate::feedback::ConfirmFlash;
use crate::input::{Button, ButtonSource, InputEvent, QuadratureDecoder};
use crate::log::{log_debug, log_warn};
use crate::menu::{MenuEvent, MenuMachine, NavigationState};
use crate::render::render;
use crate::traits::{ActuatorAdapter, DisplayBackend};

/// Raw pin levels sampled at the start of a tick
///
/// Buttons are active-low: `false` means pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLevels {
    pub enc_a: bool,
    pub enc_b: bool,
    pub confirm: bool,
    pub back: bool,
    pub set_origin: bool,
}

impl InputLevels {
    /// Encoder at rest on the pull-ups, no button pressed
    pub const IDLE: Self = Self {
        enc_a: true,
        enc_b: true,
        confirm: true,
        back: true,
        set_origin: true,
    };

    /// Raw level of one button
    pub fn button(&self, button: Button) -> bool {
        match button {
            Button::Confirm => self.confirm,
            Button::Back => self.back,
            Button::SetAsOrigin => self.set_origin,
        }
    }
}

impl Default for InputLevels {
    fn default() -> Self {
        Self::IDLE
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// A frame was rendered and presented
    pub redrawn: bool,
    /// Time the caller must wait before the next tick (stall debounce only)
    pub stall_ms: u32,
    /// Detents and presses accepted this tick
    pub events: u8,
}

/// Panel controller
pub struct Controller<D: DisplayBackend, A: ActuatorAdapter> {
    decoder: QuadratureDecoder,
    buttons: ButtonSource,
    menu: MenuMachine,
    display: D,
    actuator: A,
    render_failures: u32,
}

impl<D: DisplayBackend, A: ActuatorAdapter> Controller<D, A> {
    /// Create a controller in the power-on state
    pub fn new(config: &PanelConfig, display: D, actuator: A) -> Self {
        Self {
            decoder: QuadratureDecoder::reversed(config.encoder.reverse),
            buttons: ButtonSource::new(&config.timing),
            menu: MenuMachine::new(ConfirmFlash::new(config.timing.flash_ms)),
            display,
            actuator,
            render_failures: 0,
        }
    }

    /// Draw the initial screen
    ///
    /// Returns false if the display rejected the frame.
    pub fn start(&mut self) -> bool {
        log_debug!("Controller start");
        self.redraw()
    }

    /// Run one control-loop iteration
    ///
    /// Samples the encoder, polls Confirm, Back and SetAsOrigin in that
    /// order, advances the flash timer, then renders once if anything
    /// visible changed.
    pub fn tick(&mut self, now_ms: u32, levels: InputLevels) -> TickReport {
        let mut dirty = false;
        let mut events: u8 = 0;
        let mut presses: u32 = 0;

        if let Some(detent) = self.decoder.sample(levels.enc_a, levels.enc_b) {
            events += 1;
            dirty |= self.dispatch(InputEvent::Detent(detent), now_ms);
        }

        for button in Button::ALL {
            if let Some(press) = self.buttons.poll(button, levels.button(button), now_ms) {
                events += 1;
                presses += 1;
                dirty |= self.dispatch(InputEvent::Press(press), now_ms);
            }
        }

        dirty |= self.menu.tick(now_ms).needs_redraw();

        let redrawn = dirty && self.redraw();

        TickReport {
            redrawn,
            stall_ms: self.buttons.stall_per_press_ms() * presses,
            events,
        }
    }

    fn dispatch(&mut self, event: InputEvent, now_ms: u32) -> bool {
        self.menu
            .handle(MenuEvent::from(event), now_ms, &mut self.actuator)
            .needs_redraw()
    }

    fn redraw(&mut self) -> bool {
        match render(self.menu.state(), &mut self.display) {
            Ok(()) => true,
            Err(err) => {
                self.render_failures = self.render_failures.saturating_add(1);
                log_warn!("Render failed: {}", err);
                false
            }
        }
    }

    /// Current navigation state
    pub fn state(&self) -> &NavigationState {
        self.menu.state()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Frames the display rejected since power-on
    pub fn render_failures(&self) -> u32 {
        self.render_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DebounceMode;
    use crate::menu::Screen;
    use crate::testing::{ActuatorCall, FakeActuator};
    use crate::traits::{Axis, DisplayError, Direction};
    use stepdial_display::Frame;

    /// One CW detent from rest with the pins idling high: 11 -> 01 -> 00
    const CW_DETENT: [(bool, bool); 2] = [(false, true), (false, false)];
    /// And back to rest, which is a second CW detent: 00 -> 10 -> 11
    const CW_DETENT_2: [(bool, bool); 2] = [(true, false), (true, true)];

    struct Rig {
        controller: Controller<Frame, FakeActuator>,
        now_ms: u32,
    }

    impl Rig {
        fn new(config: PanelConfig) -> Self {
            let mut controller = Controller::new(&config, Frame::new(), FakeActuator::default());
            assert!(controller.start());
            // Prime the decoder with the idle quadrant
            controller.tick(0, InputLevels::IDLE);
            Self {
                controller,
                now_ms: 0,
            }
        }

        fn step(&mut self, levels: InputLevels) -> TickReport {
            self.now_ms += 25;
            self.controller.display_mut().reset();
            self.controller.tick(self.now_ms, levels)
        }

        fn idle(&mut self) -> TickReport {
            self.step(InputLevels::IDLE)
        }

        /// Two CW detents (one full quadrature cycle)
        fn turn_cw_twice(&mut self) {
            for (a, b) in CW_DETENT.into_iter().chain(CW_DETENT_2) {
                self.step(InputLevels {
                    enc_a: a,
                    enc_b: b,
                    ..InputLevels::IDLE
                });
            }
        }

        fn press(&mut self, button: Button) -> TickReport {
            let mut levels = InputLevels::IDLE;
            match button {
                Button::Confirm => levels.confirm = false,
                Button::Back => levels.back = false,
                Button::SetAsOrigin => levels.set_origin = false,
            }
            let report = self.step(levels);
            // Release and let the guard interval pass
            for _ in 0..6 {
                self.idle();
            }
            report
        }

        /// Home -> Stepper -> Stepper 1 -> Set origin
        fn open_set_origin(&mut self) {
            self.step(InputLevels {
                enc_a: false,
                ..InputLevels::IDLE
            });
            self.step(InputLevels {
                enc_a: false,
                enc_b: false,
                ..InputLevels::IDLE
            });
            assert_eq!(self.controller.state().cursor(), 1);
            self.press(Button::Confirm);
            self.press(Button::Confirm);
            self.press(Button::Confirm);
            assert_eq!(self.controller.state().screen(), Screen::SetOrigin);
        }
    }

    #[test]
    fn test_start_renders_home() {
        let mut controller = Controller::new(
            &PanelConfig::default(),
            Frame::new(),
            FakeActuator::default(),
        );
        assert!(controller.start());
        assert_eq!(controller.display().title(), Some("Home"));
    }

    #[test]
    fn test_idle_tick_does_not_render() {
        let mut rig = Rig::new(PanelConfig::default());
        let report = rig.idle();
        assert_eq!(report, TickReport::default());
        assert!(rig.controller.display().is_empty());
    }

    #[test]
    fn test_detent_moves_cursor_and_renders() {
        let mut rig = Rig::new(PanelConfig::default());
        rig.turn_cw_twice();
        assert_eq!(rig.controller.state().cursor(), 2);
    }

    #[test]
    fn test_reverse_encoder() {
        let mut config = PanelConfig::default();
        config.encoder.reverse = true;
        let mut rig = Rig::new(config);
        rig.turn_cw_twice();
        // Two CCW detents from 0 wrap to 1 on Home
        assert_eq!(rig.controller.state().cursor(), 1);
    }

    #[test]
    fn test_press_renders_new_screen() {
        let mut rig = Rig::new(PanelConfig::default());
        let report = rig.press(Button::Confirm);
        assert!(report.redrawn);
        assert_eq!(report.events, 1);
        assert_eq!(report.stall_ms, 0);
        assert_eq!(rig.controller.state().screen(), Screen::MotorSpeed);
    }

    #[test]
    fn test_flash_expiry_triggers_one_redraw() {
        let mut rig = Rig::new(PanelConfig::default());
        rig.press(Button::Confirm);
        rig.turn_cw_twice();
        let report = rig.step(InputLevels {
            confirm: false,
            ..InputLevels::IDLE
        });
        assert!(report.redrawn);
        assert_eq!(rig.controller.state().motor_speed_rpm(), 1000);
        assert!(rig.controller.state().flash().is_active());

        let mut expiries = 0;
        for _ in 0..20 {
            let report = rig.idle();
            if report.redrawn {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert!(!rig.controller.state().flash().is_active());
        assert_eq!(
            rig.controller.actuator().calls,
            vec![ActuatorCall::MotorSpeed(1000)]
        );
    }

    #[test]
    fn test_held_button_repeats_per_guard() {
        let mut rig = Rig::new(PanelConfig::default());
        rig.press(Button::Confirm);
        assert_eq!(rig.controller.state().screen(), Screen::MotorSpeed);

        let held = InputLevels {
            confirm: false,
            ..InputLevels::IDLE
        };
        let accepted: u32 = (0..12).map(|_| rig.step(held).events as u32).sum();
        // 300ms held at a 150ms guard
        assert_eq!(accepted, 2);
    }

    #[test]
    fn test_stall_mode_reports_stall() {
        let mut config = PanelConfig::default();
        config.timing.debounce_mode = DebounceMode::Stall;
        let mut rig = Rig::new(config);

        let report = rig.step(InputLevels {
            confirm: false,
            back: false,
            ..InputLevels::IDLE
        });
        assert_eq!(report.events, 2);
        assert_eq!(report.stall_ms, 300);
        // Confirm entered MotorSpeed, Back returned Home
        assert_eq!(rig.controller.state().screen(), Screen::Home);
    }

    #[test]
    fn test_stall_mode_handles_press_before_stall() {
        let mut config = PanelConfig::default();
        config.timing.debounce_mode = DebounceMode::Stall;
        let mut rig = Rig::new(config);

        let held = InputLevels {
            confirm: false,
            ..InputLevels::IDLE
        };
        let report = rig.step(held);
        assert!(report.redrawn);
        assert_eq!(report.stall_ms, 150);
        assert_eq!(rig.controller.state().screen(), Screen::MotorSpeed);

        // Still held after the stall: accepted again, no guard
        let report = rig.step(held);
        assert_eq!(report.events, 1);
        assert_eq!(report.stall_ms, 150);
    }

    #[test]
    fn test_jog_through_controller() {
        let mut rig = Rig::new(PanelConfig::default());
        rig.open_set_origin();

        // Idle ticks left the encoder at rest on 11
        for (a, b) in CW_DETENT {
            rig.step(InputLevels {
                enc_a: a,
                enc_b: b,
                ..InputLevels::IDLE
            });
        }
        assert_eq!(rig.controller.state().axis_step_offset(Axis::One), 1);
        assert_eq!(
            rig.controller.actuator().calls,
            vec![ActuatorCall::Step(Axis::One, Direction::Clockwise)]
        );

        let report = rig.press(Button::SetAsOrigin);
        assert!(report.redrawn);
        assert_eq!(rig.controller.state().axis_step_offset(Axis::One), 0);
        assert_eq!(rig.controller.state().screen(), Screen::StepperOptions);
    }

    #[test]
    fn test_armed_run_flag_only_forwards_hook() {
        let mut rig = Rig::new(PanelConfig::default());
        rig.open_set_origin();

        rig.press(Button::Confirm);
        assert!(rig.controller.state().origin_running());
        for _ in 0..10 {
            rig.idle();
        }

        // No steps while armed, so the offset still matches the axis
        assert_eq!(rig.controller.state().axis_step_offset(Axis::One), 0);
        assert_eq!(
            rig.controller.actuator().calls,
            vec![ActuatorCall::ContinuousRun(Axis::One, true)]
        );

        rig.press(Button::SetAsOrigin);
        assert_eq!(
            rig.controller.actuator().calls,
            vec![
                ActuatorCall::ContinuousRun(Axis::One, true),
                ActuatorCall::ContinuousRun(Axis::One, false),
            ]
        );
        assert_eq!(rig.controller.actuator().steps(Axis::One), 0);
    }

    /// Display that fails every call
    struct BrokenDisplay;

    impl DisplayBackend for BrokenDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
        fn draw_title_bar(&mut self, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
        fn draw_highlight_marker(&mut self, _: u16, _: u16) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
        fn draw_text(&mut self, _: &str, _: u16, _: u16, _: bool) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
        fn draw_filled_rect(&mut self, _: u16, _: u16, _: u16, _: u16) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
        fn present(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
    }

    #[test]
    fn test_render_failure_is_counted_not_fatal() {
        let mut controller = Controller::new(
            &PanelConfig::default(),
            BrokenDisplay,
            FakeActuator::default(),
        );
        assert!(!controller.start());

        let report = controller.tick(
            25,
            InputLevels {
                confirm: false,
                ..InputLevels::IDLE
            },
        );
        assert!(!report.redrawn);
        assert_eq!(report.events, 1);
        assert_eq!(controller.state().screen(), Screen::MotorSpeed);
        assert_eq!(controller.render_failures(), 2);
    }
}
