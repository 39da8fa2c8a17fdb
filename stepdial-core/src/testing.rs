//! Test doubles shared by the unit tests

use crate::traits::{ActuatorAdapter, Axis, Direction};

/// One recorded actuator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Step(Axis, Direction),
    ContinuousRun(Axis, bool),
    MotorSpeed(u16),
}

/// Actuator that records every call
#[derive(Debug, Default)]
pub struct FakeActuator {
    pub calls: Vec<ActuatorCall>,
}

impl FakeActuator {
    /// Number of steps sent to `axis`
    pub fn steps(&self, axis: Axis) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ActuatorCall::Step(a, _) if *a == axis))
            .count()
    }
}

impl ActuatorAdapter for FakeActuator {
    fn step_axis(&mut self, axis: Axis, direction: Direction) {
        self.calls.push(ActuatorCall::Step(axis, direction));
    }

    fn set_continuous_run(&mut self, axis: Axis, running: bool) {
        self.calls.push(ActuatorCall::ContinuousRun(axis, running));
    }

    fn set_motor_speed(&mut self, rpm: u16) {
        self.calls.push(ActuatorCall::MotorSpeed(rpm));
    }
}
