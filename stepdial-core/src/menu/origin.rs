//! Origin-Set Sub-Controller
//!
//! While the SetOrigin screen is shown, encoder detents jog the selected
//! axis instead of moving the cursor. Each detent is one step and moves the
//! axis step offset by one. Marking the origin zeroes that offset.
//!
//! The run flag toggled by Confirm is tracked here and forwarded to the
//! actuator. What a running axis does physically is up to the actuator.

use super::screen::Screen;
use super::state::NavigationState;
use crate::log::log_debug;
use crate::traits::{ActuatorAdapter, Axis, Direction};

/// Mutable view of the navigation state while in origin-set mode
pub struct OriginSession<'a> {
    state: &'a mut NavigationState,
    axis: Axis,
}

impl<'a> OriginSession<'a> {
    /// Attach to the state
    ///
    /// Returns `None` unless the SetOrigin screen is shown with an axis
    /// selected.
    pub fn attach(state: &'a mut NavigationState) -> Option<Self> {
        if state.screen != Screen::SetOrigin {
            return None;
        }
        let axis = state.selected_axis?;
        Some(Self { state, axis })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Steps jogged since the origin was last set
    pub fn offset(&self) -> i32 {
        self.state.axis_step_offset[self.axis.index()]
    }

    /// Step the axis once and track the offset
    pub fn jog<A: ActuatorAdapter>(&mut self, direction: Direction, actuator: &mut A) {
        let offset = &mut self.state.axis_step_offset[self.axis.index()];
        *offset = offset.saturating_add(direction.delta() as i32);
        actuator.step_axis(self.axis, direction);
    }

    /// Flip the run flag and forward it
    ///
    /// Returns the new value.
    pub fn toggle_run<A: ActuatorAdapter>(&mut self, actuator: &mut A) -> bool {
        let running = !self.state.origin_running;
        self.state.origin_running = running;
        log_debug!("Axis {} run {}", self.axis.number(), running);
        actuator.set_continuous_run(self.axis, running);
        running
    }

    /// Make the current position the origin and leave to StepperOptions
    pub fn set_as_origin<A: ActuatorAdapter>(self, actuator: &mut A) {
        log_debug!(
            "Axis {} origin set at offset {}",
            self.axis.number(),
            self.offset()
        );
        self.state.axis_step_offset[self.axis.index()] = 0;
        self.leave(actuator);
    }

    /// Leave to StepperOptions keeping the offset
    pub fn abandon<A: ActuatorAdapter>(self, actuator: &mut A) {
        self.leave(actuator);
    }

    fn leave<A: ActuatorAdapter>(self, actuator: &mut A) {
        if self.state.origin_running {
            self.state.origin_running = false;
            actuator.set_continuous_run(self.axis, false);
        }
        self.state.enter(Screen::StepperOptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ActuatorCall, FakeActuator};

    fn origin_state(axis: Axis) -> NavigationState {
        let mut state = NavigationState::default();
        state.selected_axis = Some(axis);
        state.screen = Screen::SetOrigin;
        state
    }

    #[test]
    fn test_attach_requires_screen_and_axis() {
        let mut state = NavigationState::default();
        assert!(OriginSession::attach(&mut state).is_none());

        state.screen = Screen::SetOrigin;
        assert!(OriginSession::attach(&mut state).is_none());

        state.selected_axis = Some(Axis::Two);
        let session = OriginSession::attach(&mut state).unwrap();
        assert_eq!(session.axis(), Axis::Two);
    }

    #[test]
    fn test_jog_tracks_offset() {
        let mut state = origin_state(Axis::One);
        let mut actuator = FakeActuator::default();

        let mut session = OriginSession::attach(&mut state).unwrap();
        session.jog(Direction::Clockwise, &mut actuator);
        session.jog(Direction::Clockwise, &mut actuator);
        session.jog(Direction::CounterClockwise, &mut actuator);
        assert_eq!(session.offset(), 1);

        assert_eq!(state.axis_step_offset(Axis::One), 1);
        assert_eq!(state.axis_step_offset(Axis::Two), 0);
        assert_eq!(actuator.steps(Axis::One), 3);
    }

    #[test]
    fn test_set_as_origin_zeroes_and_exits() {
        let mut state = origin_state(Axis::Two);
        let mut actuator = FakeActuator::default();

        let mut session = OriginSession::attach(&mut state).unwrap();
        session.jog(Direction::CounterClockwise, &mut actuator);
        assert!(session.toggle_run(&mut actuator));
        session.set_as_origin(&mut actuator);

        assert_eq!(state.axis_step_offset(Axis::Two), 0);
        assert_eq!(state.screen(), Screen::StepperOptions);
        assert_eq!(state.cursor(), 0);
        assert!(!state.origin_running());
        assert_eq!(
            actuator.calls.last(),
            Some(&ActuatorCall::ContinuousRun(Axis::Two, false))
        );
    }

    #[test]
    fn test_abandon_keeps_offset() {
        let mut state = origin_state(Axis::One);
        let mut actuator = FakeActuator::default();

        let mut session = OriginSession::attach(&mut state).unwrap();
        session.jog(Direction::Clockwise, &mut actuator);
        session.abandon(&mut actuator);

        assert_eq!(state.axis_step_offset(Axis::One), 1);
        assert_eq!(state.screen(), Screen::StepperOptions);
        // Never ran, so no stop is forwarded
        assert!(!actuator
            .calls
            .iter()
            .any(|call| matches!(call, ActuatorCall::ContinuousRun(..))));
    }
}
