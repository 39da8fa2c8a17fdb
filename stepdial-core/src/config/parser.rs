//! Minimal `panel.toml` parser
//!
//! Handles only the subset of TOML the panel configuration uses. It does
//! NOT support the full TOML spec.
//!
//! Supported features:
//! - `[timing]`, `[encoder]`, `[stepper.1]`, `[stepper.2]` section headers
//! - Key = value pairs (integer, boolean, quoted string)
//! - Comments (# ...), whole-line or trailing
//!
//! Unknown sections and keys are rejected rather than ignored so a typo in
//! the file cannot silently fall back to a default.

use super::types::{ConfigError, DebounceMode, PanelConfig};
use crate::traits::Axis;

/// Parse error, tagged with the 1-based line number where it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection(u16),
    /// Line is neither a header nor `key = value`
    InvalidLine(u16),
    /// Key not valid in the current section
    UnknownKey(u16),
    /// Value has the wrong type or cannot be parsed
    InvalidValue(u16),
    /// Parsed values failed range validation
    Invalid(ConfigError),
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Encoder,
    Stepper(Axis),
}

/// A parsed right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value<'a> {
    Integer(u32),
    Bool(bool),
    Str(&'a str),
}

/// Parse TOML text into a validated `PanelConfig`
///
/// Keys that are absent keep their default value.
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = (index + 1).min(u16::MAX as usize) as u16;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(ParseError::InvalidSection(line_no))?;
            section = parse_section_header(name.trim()).ok_or(ParseError::InvalidSection(line_no))?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::InvalidLine(line_no))?;
        let key = key.trim();
        let value = parse_value(value.trim()).ok_or(ParseError::InvalidValue(line_no))?;

        apply(&mut config, section, key, value, line_no)?;
    }

    config.validate().map_err(ParseError::Invalid)?;
    Ok(config)
}

/// Remove a trailing comment, ignoring `#` inside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(name: &str) -> Option<Section> {
    match name {
        "timing" => Some(Section::Timing),
        "encoder" => Some(Section::Encoder),
        "stepper.1" => Some(Section::Stepper(Axis::One)),
        "stepper.2" => Some(Section::Stepper(Axis::Two)),
        _ => None,
    }
}

fn parse_value(text: &str) -> Option<Value<'_>> {
    if let Some(quoted) = text.strip_prefix('"') {
        return quoted.strip_suffix('"').map(Value::Str);
    }
    match text {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        _ => {
            // TOML allows underscores as digit separators
            let mut n: u32 = 0;
            let mut digits = 0;
            for ch in text.chars() {
                if ch == '_' {
                    continue;
                }
                let d = ch.to_digit(10)?;
                n = n.checked_mul(10)?.checked_add(d)?;
                digits += 1;
            }
            (digits > 0).then_some(Value::Integer(n))
        }
    }
}

fn apply(
    config: &mut PanelConfig,
    section: Section,
    key: &str,
    value: Value<'_>,
    line: u16,
) -> Result<(), ParseError> {
    let bad_value = ParseError::InvalidValue(line);

    match (section, key) {
        (Section::Timing, "loop_period_ms") => {
            config.timing.loop_period_ms = as_integer(value).ok_or(bad_value)?;
        }
        (Section::Timing, "debounce_ms") => {
            config.timing.debounce_ms = as_integer(value).ok_or(bad_value)?;
        }
        (Section::Timing, "flash_ms") => {
            config.timing.flash_ms = as_integer(value).ok_or(bad_value)?;
        }
        (Section::Timing, "debounce_mode") => {
            config.timing.debounce_mode = match value {
                Value::Str("guard") => DebounceMode::Guard,
                Value::Str("stall") => DebounceMode::Stall,
                _ => return Err(bad_value),
            };
        }
        (Section::Encoder, "reverse") => {
            config.encoder.reverse = as_bool(value).ok_or(bad_value)?;
        }
        (Section::Stepper(axis), "invert_direction") => {
            config.stepper.get_mut(axis).invert_direction = as_bool(value).ok_or(bad_value)?;
        }
        (Section::Stepper(axis), "pulse_width_us") => {
            config.stepper.get_mut(axis).pulse_width_us = as_integer(value).ok_or(bad_value)?;
        }
        _ => return Err(ParseError::UnknownKey(line)),
    }

    Ok(())
}

fn as_integer(value: Value<'_>) -> Option<u32> {
    match value {
        Value::Integer(n) => Some(n),
        _ => None,
    }
}

fn as_bool(value: Value<'_>) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(b),
        _ => None,
    }
}
