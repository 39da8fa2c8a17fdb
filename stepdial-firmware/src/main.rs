//! Stepdial control panel firmware
//!
//! Rotary-encoder menu panel for an RP2040 board: one encoder, three
//! buttons and a 128x64 SSD1306 OLED drive a motor speed setting and two
//! stepper axes.
//!
//! Pin map:
//! - I2C0: SDA GPIO0, SCL GPIO1 (OLED at 0x3C)
//! - Encoder: A GPIO5, B GPIO6
//! - Buttons: Confirm GPIO3, Back GPIO2, Set origin GPIO4
//! - Axis 1: STEP GPIO10, DIR GPIO11
//! - Axis 2: STEP GPIO12, DIR GPIO13

#![no_std]
#![no_main]

mod display;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Timer};
use stepdial_core::config::{parse_config, PanelConfig};
use stepdial_core::traits::Axis;
use stepdial_core::Controller;
use stepdial_drivers::{PanelActuator, StepDirStepper};
use {defmt_rtt as _, panic_probe as _};

use display::Ssd1306Backend;
use tasks::PanelInputs;

/// Embedded configuration (compiled into firmware)
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// OLED I2C clock
const I2C_FREQUENCY_HZ: u32 = 400_000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Stepdial firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("RP2040 initialized");

    let config = load_config();

    // Display
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c_config);
    let mut display = Ssd1306Backend::new(i2c);
    match display.init() {
        Ok(()) => info!("Display initialized"),
        Err(e) => warn!("Display init failed: {}", e),
    }

    // Encoder and buttons, active-low with internal pull-ups
    let inputs = PanelInputs {
        enc_a: Input::new(p.PIN_5, Pull::Up),
        enc_b: Input::new(p.PIN_6, Pull::Up),
        confirm: Input::new(p.PIN_3, Pull::Up),
        back: Input::new(p.PIN_2, Pull::Up),
        set_origin: Input::new(p.PIN_4, Pull::Up),
    };
    info!("Inputs initialized");

    // Steppers
    let axis1 = unwrap!(StepDirStepper::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Delay,
        *config.stepper.get(Axis::One),
    ));
    let axis2 = unwrap!(StepDirStepper::new(
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
        Delay,
        *config.stepper.get(Axis::Two),
    ));
    let actuator = PanelActuator::new(axis1, axis2);
    info!("Steppers initialized");

    let controller = Controller::new(&config, display, actuator);

    spawner
        .spawn(tasks::control_task(
            controller,
            inputs,
            config.timing.loop_period_ms,
        ))
        .unwrap();

    info!("All tasks spawned");

    loop {
        Timer::after(Duration::from_secs(10)).await;
        debug!("Main heartbeat");
    }
}

/// Parse the embedded panel.toml, falling back to defaults on error
fn load_config() -> PanelConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config loaded: {} ms loop, {} ms debounce ({}), {} ms flash",
                config.timing.loop_period_ms,
                config.timing.debounce_ms,
                config.timing.debounce_mode,
                config.timing.flash_ms
            );
            config
        }
        Err(e) => {
            warn!("panel.toml rejected: {}, using defaults", e);
            PanelConfig::default()
        }
    }
}
