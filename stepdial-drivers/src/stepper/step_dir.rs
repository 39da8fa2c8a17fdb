//! Step/direction stepper output
//!
//! Drives any STEP/DIR stepper driver (A4988, DRV8825, TMC2209 in
//! standalone mode) from two GPIO outputs. One step is:
//!
//! 1. Set DIR if the direction changed, then wait one pulse width of
//!    setup time
//! 2. STEP high for `pulse_width_us`
//! 3. STEP low for `pulse_width_us`
//!
//! The driver keeps an absolute step position since power-on.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use stepdial_core::config::StepperConfig;
use stepdial_core::traits::Direction;

/// Stepper output errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepperError {
    /// Setting the STEP pin failed
    StepPin,
    /// Setting the DIR pin failed
    DirPin,
}

/// One axis that can be moved a single step at a time
pub trait AxisDrive {
    /// Move one step in `direction`
    fn step(&mut self, direction: Direction) -> Result<(), StepperError>;

    /// Absolute position in steps
    fn position(&self) -> i32;
}

/// STEP/DIR stepper driver
pub struct StepDirStepper<STEP, DIR, D> {
    step: STEP,
    dir: DIR,
    delay: D,
    config: StepperConfig,
    /// Direction the DIR pin currently encodes
    direction: Option<Direction>,
    /// Absolute position in steps
    position: i32,
}

impl<STEP, DIR, D> StepDirStepper<STEP, DIR, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    D: DelayNs,
{
    /// Create a new driver
    ///
    /// The STEP pin is driven low so the first pulse has a clean edge.
    pub fn new(
        mut step: STEP,
        dir: DIR,
        delay: D,
        config: StepperConfig,
    ) -> Result<Self, StepperError> {
        step.set_low().map_err(|_| StepperError::StepPin)?;
        Ok(Self {
            step,
            dir,
            delay,
            config,
            direction: None,
            position: 0,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    /// Direction of the last step, if any
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// DIR level for a direction
    ///
    /// High means clockwise unless `invert_direction` is set.
    fn dir_level(&self, direction: Direction) -> bool {
        (direction == Direction::Clockwise) != self.config.invert_direction
    }

    fn set_direction(&mut self, direction: Direction) -> Result<(), StepperError> {
        if self.direction == Some(direction) {
            return Ok(());
        }

        let result = if self.dir_level(direction) {
            self.dir.set_high()
        } else {
            self.dir.set_low()
        };
        result.map_err(|_| StepperError::DirPin)?;

        self.direction = Some(direction);
        self.delay.delay_us(self.config.pulse_width_us);
        Ok(())
    }

    fn pulse(&mut self) -> Result<(), StepperError> {
        let width = self.config.pulse_width_us;
        self.step.set_high().map_err(|_| StepperError::StepPin)?;
        self.delay.delay_us(width);
        self.step.set_low().map_err(|_| StepperError::StepPin)?;
        self.delay.delay_us(width);
        Ok(())
    }
}

impl<STEP, DIR, D> AxisDrive for StepDirStepper<STEP, DIR, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    D: DelayNs,
{
    fn step(&mut self, direction: Direction) -> Result<(), StepperError> {
        self.set_direction(direction)?;
        self.pulse()?;
        self.position = self.position.saturating_add(direction.delta() as i32);
        Ok(())
    }

    fn position(&self) -> i32 {
        self.position
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::cell::RefCell;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::rc::Rc;

    /// Pin event recorded by the mocks
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PinEvent {
        Step(bool),
        Dir(bool),
        DelayUs(u32),
    }

    pub type Log = Rc<RefCell<Vec<PinEvent>>>;

    /// Mock GPIO pin writing into a shared log
    pub struct MockPin {
        log: Log,
        is_step: bool,
        fail: bool,
    }

    impl MockPin {
        pub fn step(log: &Log) -> Self {
            Self {
                log: log.clone(),
                is_step: true,
                fail: false,
            }
        }

        pub fn dir(log: &Log) -> Self {
            Self {
                log: log.clone(),
                is_step: false,
                fail: false,
            }
        }

        pub fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn record(&mut self, high: bool) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            let event = if self.is_step {
                PinEvent::Step(high)
            } else {
                PinEvent::Dir(high)
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.record(false)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.record(true)
        }
    }

    /// Mock delay writing into the same log
    pub struct MockDelay {
        log: Log,
    }

    impl MockDelay {
        pub fn new(log: &Log) -> Self {
            Self { log: log.clone() }
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(PinEvent::DelayUs(ns / 1000));
        }

        fn delay_us(&mut self, us: u32) {
            self.log.borrow_mut().push(PinEvent::DelayUs(us));
        }
    }

    pub type MockStepper = StepDirStepper<MockPin, MockPin, MockDelay>;

    pub fn mock_stepper(log: &Log, config: StepperConfig) -> MockStepper {
        StepDirStepper::new(
            MockPin::step(log),
            MockPin::dir(log),
            MockDelay::new(log),
            config,
        )
        .unwrap()
    }

    fn config(invert: bool) -> StepperConfig {
        StepperConfig {
            invert_direction: invert,
            pulse_width_us: 5,
        }
    }

    #[test]
    fn test_new_drives_step_low() {
        let log = Log::default();
        let _stepper = mock_stepper(&log, config(false));
        assert_eq!(*log.borrow(), vec![PinEvent::Step(false)]);
    }

    #[test]
    fn test_step_sequence() {
        let log = Log::default();
        let mut stepper = mock_stepper(&log, config(false));
        log.borrow_mut().clear();

        stepper.step(Direction::Clockwise).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                PinEvent::Dir(true),
                PinEvent::DelayUs(5),
                PinEvent::Step(true),
                PinEvent::DelayUs(5),
                PinEvent::Step(false),
                PinEvent::DelayUs(5),
            ]
        );
        assert_eq!(stepper.position(), 1);
    }

    #[test]
    fn test_dir_only_set_on_change() {
        let log = Log::default();
        let mut stepper = mock_stepper(&log, config(false));

        stepper.step(Direction::Clockwise).unwrap();
        stepper.step(Direction::Clockwise).unwrap();
        stepper.step(Direction::CounterClockwise).unwrap();

        let dir_writes: Vec<_> = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, PinEvent::Dir(_)))
            .copied()
            .collect();
        assert_eq!(dir_writes, vec![PinEvent::Dir(true), PinEvent::Dir(false)]);
        assert_eq!(stepper.position(), 1);
        assert_eq!(stepper.direction(), Some(Direction::CounterClockwise));
    }

    #[test]
    fn test_inverted_direction() {
        let log = Log::default();
        let mut stepper = mock_stepper(&log, config(true));
        stepper.step(Direction::Clockwise).unwrap();
        assert!(log.borrow().contains(&PinEvent::Dir(false)));
    }

    #[test]
    fn test_pin_failure_keeps_position() {
        let log = Log::default();
        let mut stepper = StepDirStepper::new(
            MockPin::step(&log),
            MockPin::dir(&log).failing(),
            MockDelay::new(&log),
            config(false),
        )
        .unwrap();

        assert_eq!(
            stepper.step(Direction::Clockwise),
            Err(StepperError::DirPin)
        );
        assert_eq!(stepper.position(), 0);
        assert_eq!(stepper.direction(), None);
    }
}
