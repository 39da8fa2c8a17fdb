//! Panel actuator adapter
//!
//! Implements the core `ActuatorAdapter` on top of two stepper axes. Jog
//! steps go straight to the axis driver. The run flags and the motor speed
//! are only stored; nothing here moves an axis on its own.

use stepdial_core::traits::{ActuatorAdapter, Axis, Direction};

use crate::stepper::AxisDrive;

/// Actuator for two stepper axes plus the motor speed intent
pub struct PanelActuator<X, Y> {
    axis1: X,
    axis2: Y,
    motor_rpm: Option<u16>,
    running: [bool; 2],
    step_errors: u32,
}

impl<X: AxisDrive, Y: AxisDrive> PanelActuator<X, Y> {
    pub fn new(axis1: X, axis2: Y) -> Self {
        Self {
            axis1,
            axis2,
            motor_rpm: None,
            running: [false; 2],
            step_errors: 0,
        }
    }

    /// Last requested motor speed, `None` until one is committed
    pub fn motor_rpm(&self) -> Option<u16> {
        self.motor_rpm
    }

    /// Whether continuous rotation is armed for `axis`
    pub fn is_running(&self, axis: Axis) -> bool {
        self.running[axis.index()]
    }

    /// Absolute step position of `axis`
    pub fn position(&self, axis: Axis) -> i32 {
        match axis {
            Axis::One => self.axis1.position(),
            Axis::Two => self.axis2.position(),
        }
    }

    /// Steps that failed at the pin level since power-on
    pub fn step_errors(&self) -> u32 {
        self.step_errors
    }
}

impl<X: AxisDrive, Y: AxisDrive> ActuatorAdapter for PanelActuator<X, Y> {
    fn step_axis(&mut self, axis: Axis, direction: Direction) {
        let result = match axis {
            Axis::One => self.axis1.step(direction),
            Axis::Two => self.axis2.step(direction),
        };

        if let Err(_err) = result {
            self.step_errors = self.step_errors.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("Axis {} step failed: {}", axis.number(), _err);
        }
    }

    fn set_continuous_run(&mut self, axis: Axis, running: bool) {
        #[cfg(feature = "defmt")]
        defmt::info!("Axis {} continuous run: {}", axis.number(), running);
        self.running[axis.index()] = running;
    }

    fn set_motor_speed(&mut self, rpm: u16) {
        #[cfg(feature = "defmt")]
        defmt::info!("Motor speed: {} RPM", rpm);
        self.motor_rpm = Some(rpm);
    }
}
