//! Control loop task
//!
//! Samples the encoder and buttons once per loop period and hands the
//! levels to the core controller. Decoding, debouncing, menu navigation
//! and rendering all happen inside `Controller::tick`; this task only owns
//! the timing.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};
use stepdial_core::{Controller, InputLevels};
use stepdial_drivers::{PanelActuator, StepDirStepper};

use crate::display::Ssd1306Backend;

pub type PanelDisplay = Ssd1306Backend<I2c<'static, I2C0, Blocking>>;
pub type AxisStepper = StepDirStepper<Output<'static>, Output<'static>, Delay>;
pub type PanelController = Controller<PanelDisplay, PanelActuator<AxisStepper, AxisStepper>>;

/// Encoder and button inputs, all pulled up
pub struct PanelInputs {
    pub enc_a: Input<'static>,
    pub enc_b: Input<'static>,
    pub confirm: Input<'static>,
    pub back: Input<'static>,
    pub set_origin: Input<'static>,
}

impl PanelInputs {
    fn sample(&self) -> InputLevels {
        InputLevels {
            enc_a: self.enc_a.is_high(),
            enc_b: self.enc_b.is_high(),
            confirm: self.confirm.is_high(),
            back: self.back.is_high(),
            set_origin: self.set_origin.is_high(),
        }
    }
}

/// Control task - one controller tick per loop period
#[embassy_executor::task]
pub async fn control_task(
    mut controller: PanelController,
    inputs: PanelInputs,
    loop_period_ms: u32,
) {
    info!("Control task started ({} ms loop)", loop_period_ms);

    if !controller.start() {
        warn!("Initial render failed, continuing without display");
    }

    let mut ticker = Ticker::every(Duration::from_millis(loop_period_ms as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;
        let report = controller.tick(now_ms, inputs.sample());

        if report.events > 0 {
            trace!(
                "Tick {}: {} events, redrawn={}",
                now_ms,
                report.events,
                report.redrawn
            );
        }

        if report.stall_ms > 0 {
            Timer::after_millis(report.stall_ms as u64).await;
            ticker.reset();
        }
    }
}
