//! Actuator adapter trait
//!
//! This trait abstracts over whatever physically moves the two stepper axes
//! and the spindle motor. The core only emits intents; step timing,
//! microstepping and current control belong to the implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation direction of one encoder detent or one stepper step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation (+1)
    Clockwise,
    /// Counter-clockwise rotation (-1)
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Signed unit step for this direction
    pub fn delta(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// One of the two stepper axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    One,
    Two,
}

impl Axis {
    /// Both axes in panel order
    pub const ALL: [Axis; 2] = [Axis::One, Axis::Two];

    /// Zero-based index for per-axis arrays
    pub const fn index(self) -> usize {
        match self {
            Axis::One => 0,
            Axis::Two => 1,
        }
    }

    /// Axis number as printed on the panel (1 or 2)
    pub const fn number(self) -> u8 {
        match self {
            Axis::One => 1,
            Axis::Two => 2,
        }
    }
}

/// Trait for the actuator collaborator
///
/// All calls are fire-and-forget: the core never waits for, or reads back,
/// an acknowledgement.
pub trait ActuatorAdapter {
    /// Move `axis` by a single step in `direction`
    fn step_axis(&mut self, axis: Axis, direction: Direction);

    /// Arm or disarm continuous rotation of `axis`
    ///
    /// Mirrors the origin-set run flag. What "running" means physically is
    /// up to the implementation.
    fn set_continuous_run(&mut self, axis: Axis, running: bool);

    /// Request a new spindle motor speed
    fn set_motor_speed(&mut self, rpm: u16);
}

impl<T: ActuatorAdapter + ?Sized> ActuatorAdapter for &mut T {
    fn step_axis(&mut self, axis: Axis, direction: Direction) {
        (**self).step_axis(axis, direction)
    }

    fn set_continuous_run(&mut self, axis: Axis, running: bool) {
        (**self).set_continuous_run(axis, running)
    }

    fn set_motor_speed(&mut self, rpm: u16) {
        (**self).set_motor_speed(rpm)
    }
}
