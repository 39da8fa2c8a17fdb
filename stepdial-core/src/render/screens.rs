//! Per-screen render routines
//!
//! Each routine draws the body of one screen. The frame around it (clear,
//! title bar, present) is emitted by [`super::render`].
//!
//! Text is formatted into `heapless::String` with `core::fmt::Write`.

use core::fmt::Write;

use heapless::String;
use stepdial_display::layout::FONT_WIDTH;
use stepdial_display::{DisplayBackend, DisplayError};

use crate::feedback::FlashTarget;
use crate::menu::options::{
    custom_angle_at, rpm_at, ANGLE_CUSTOM_INDEX, ANGLE_CUSTOM_LABEL, ANGLE_PRESETS, AXIS_ITEMS,
    AXIS_OPTION_ITEMS, HOME_ITEMS, RPM_OPTIONS,
};
use crate::menu::{NavigationState, Screen};
use crate::traits::Axis;

/// Scratch text for formatted labels
pub type Label = String<24>;

/// Plain list: marker column and first row
const LIST_MARKER_X: u16 = 10;
const LIST_TEXT_X: u16 = 20;
const LIST_TOP: u16 = 24;
const LIST_PITCH: u16 = 16;

/// Paged list: marker column, first row and flash strip
const PAGE_MARKER_X: u16 = 6;
const PAGE_TEXT_X: u16 = 20;
const PAGE_TOP: u16 = 20;
const FLASH_X: u16 = 18;
const FLASH_WIDTH: u16 = 100;
const FLASH_HEIGHT: u16 = 12;

const RPM_ROWS: u8 = 3;
const RPM_PITCH: u16 = 14;
const ANGLE_ROWS: u8 = 4;
const ANGLE_PITCH: u16 = 12;

const CUSTOM_X: u16 = 40;
const CUSTOM_Y: u16 = 32;

/// Title for the current screen
pub fn title(state: &NavigationState) -> Label {
    let mut s = Label::new();
    let axis = state.selected_axis().map_or(0, Axis::number);
    let _ = match state.screen() {
        Screen::Home => write!(s, "Home"),
        Screen::MotorSpeed => write!(s, "RPM"),
        Screen::StepperPicker => write!(s, "Stepper"),
        Screen::StepperOptions => write!(s, "Stepper {}", axis),
        Screen::SetOrigin => write!(s, "Set Origin {}", axis),
        Screen::AnglePreset => write!(s, "Angle"),
        Screen::CustomAngle => write!(s, "Custom"),
        Screen::Monitor => write!(s, "Monitor"),
    };
    s
}

/// Draw the body of the current screen
pub fn body<B: DisplayBackend + ?Sized>(
    state: &NavigationState,
    backend: &mut B,
) -> Result<(), DisplayError> {
    let screen = state.screen();
    let flash = state.flash().highlight(screen);

    match screen {
        Screen::Home => list(backend, HOME_ITEMS.iter().map(|item| item.label), state.cursor()),
        Screen::StepperPicker => list(
            backend,
            AXIS_ITEMS.iter().map(|&(label, _)| label),
            state.cursor(),
        ),
        Screen::StepperOptions => list(
            backend,
            AXIS_OPTION_ITEMS.iter().map(|item| item.label),
            state.cursor(),
        ),
        Screen::MotorSpeed => paged(
            backend,
            RPM_OPTIONS.len() as u8,
            RPM_ROWS,
            RPM_PITCH,
            state.cursor(),
            flash,
            |i| {
                let mut s = Label::new();
                if let Some(rpm) = rpm_at(i) {
                    let _ = write!(s, "{}", rpm);
                }
                s
            },
        ),
        Screen::AnglePreset => paged(
            backend,
            ANGLE_CUSTOM_INDEX + 1,
            ANGLE_ROWS,
            ANGLE_PITCH,
            state.cursor(),
            flash,
            |i| {
                let mut s = Label::new();
                match ANGLE_PRESETS.get(i as usize) {
                    Some(deg) => {
                        let _ = write!(s, "{} deg", deg);
                    }
                    None => {
                        let _ = s.push_str(ANGLE_CUSTOM_LABEL);
                    }
                }
                s
            },
        ),
        Screen::CustomAngle => custom_angle(backend, state.cursor(), flash),
        Screen::SetOrigin => set_origin(backend, state),
        Screen::Monitor => monitor(backend, state),
    }
}

/// Fixed list with a marker on the cursor row
fn list<'a, B, I>(backend: &mut B, labels: I, cursor: u8) -> Result<(), DisplayError>
where
    B: DisplayBackend + ?Sized,
    I: Iterator<Item = &'a str>,
{
    backend.draw_highlight_marker(LIST_MARKER_X, LIST_TOP + LIST_PITCH * cursor as u16)?;
    for (i, label) in labels.enumerate() {
        backend.draw_text(label, LIST_TEXT_X, LIST_TOP + LIST_PITCH * i as u16, false)?;
    }
    Ok(())
}

/// Scrolling list showing the page of `rows` that holds the cursor
fn paged<B, F>(
    backend: &mut B,
    count: u8,
    rows: u8,
    pitch: u16,
    cursor: u8,
    flash: Option<FlashTarget>,
    label: F,
) -> Result<(), DisplayError>
where
    B: DisplayBackend + ?Sized,
    F: Fn(u8) -> Label,
{
    let top = cursor - cursor % rows;

    for row in 0..rows {
        let index = top + row;
        if index >= count {
            break;
        }
        let y = PAGE_TOP + pitch * row as u16;

        if index == cursor {
            backend.draw_highlight_marker(PAGE_MARKER_X, y)?;
        }

        let text = label(index);
        let flashed = flash == Some(FlashTarget::Index(index));
        if flashed {
            backend.draw_filled_rect(FLASH_X, y - 1, FLASH_WIDTH, FLASH_HEIGHT)?;
        }
        backend.draw_text(&text, PAGE_TEXT_X, y, flashed)?;
    }
    Ok(())
}

fn custom_angle<B: DisplayBackend + ?Sized>(
    backend: &mut B,
    cursor: u8,
    flash: Option<FlashTarget>,
) -> Result<(), DisplayError> {
    let mut s = Label::new();
    let _ = write!(s, "{} deg", custom_angle_at(cursor));

    let flashed = flash == Some(FlashTarget::Custom);
    if flashed {
        let width = s.len() as u16 * FONT_WIDTH + 8;
        backend.draw_filled_rect(CUSTOM_X - 4, CUSTOM_Y - 1, width, FLASH_HEIGHT)?;
    }
    backend.draw_text(&s, CUSTOM_X, CUSTOM_Y, flashed)
}

fn set_origin<B: DisplayBackend + ?Sized>(
    backend: &mut B,
    state: &NavigationState,
) -> Result<(), DisplayError> {
    let run_hint = if state.origin_running() {
        "Btn1: Stop"
    } else {
        "Btn1: Spin"
    };

    backend.draw_text("Rotate: jog", 0, 18, false)?;
    backend.draw_text(run_hint, 0, 27, false)?;
    backend.draw_text("Btn3: Set origin", 0, 36, false)?;
    backend.draw_text("Back: Return", 0, 45, false)?;

    let mut steps = Label::new();
    let offset = state
        .selected_axis()
        .map_or(0, |axis| state.axis_step_offset(axis));
    let _ = write!(steps, "Steps: {}", offset);
    backend.draw_text(&steps, 0, 54, false)
}

fn monitor<B: DisplayBackend + ?Sized>(
    backend: &mut B,
    state: &NavigationState,
) -> Result<(), DisplayError> {
    let mut s = Label::new();
    let _ = write!(s, "Motor: {} RPM", state.motor_speed_rpm());
    backend.draw_text(&s, 10, 20, false)?;

    for (row, axis) in Axis::ALL.into_iter().enumerate() {
        s.clear();
        let _ = write!(
            s,
            "Stepper {}: {} deg",
            axis.number(),
            state.axis_angle_deg(axis)
        );
        backend.draw_text(&s, 10, 34 + 14 * row as u16, false)?;
    }
    Ok(())
}
