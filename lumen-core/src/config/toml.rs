//! Minimal TOML reader for the driver configuration
//!
//! Handles only the subset the configuration file uses. It does NOT
//! support the full TOML spec.
//!
//! Supported:
//! - `[section]` headers: `bus`, `timing`, `panel`, `pattern`
//! - `key = value` pairs with unsigned integer values (`_` separators allowed)
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys left out keep their default. `ready_spin_limit = 0` selects an
//! unbounded bus-ready spin.

use super::types::{ConfigError, DriverConfig};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Bus,
    Timing,
    Panel,
    Pattern,
}

/// Parse a configuration file, starting from the defaults
pub fn parse_config(input: &str) -> Result<DriverConfig, ConfigError> {
    let mut config = DriverConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(&mut config, section, key, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "bus" => Ok(Section::Bus),
        "timing" => Ok(Section::Timing),
        "panel" => Ok(Section::Panel),
        "pattern" => Ok(Section::Pattern),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    config: &mut DriverConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Bus, "frequency_hz") => config.spi_frequency_hz = parse_int(value)?,
        (Section::Bus, "ready_spin_limit") => {
            config.ready_spin_limit = match parse_int(value)? {
                0 => None,
                limit => Some(limit),
            };
        }
        (Section::Timing, "reset_pulse_ms") => config.timing.reset_pulse_ms = parse_int(value)?,
        (Section::Timing, "reset_settle_ms") => config.timing.reset_settle_ms = parse_int(value)?,
        (Section::Timing, "wake_settle_ms") => config.timing.wake_settle_ms = parse_int(value)?,
        (Section::Timing, "display_on_settle_ms") => {
            config.timing.display_on_settle_ms = parse_int(value)?
        }
        (Section::Panel, "width") => config.panel.width = parse_u16(value)?,
        (Section::Panel, "height") => config.panel.height = parse_u16(value)?,
        (Section::Pattern, "band_rows") => config.pattern.band_rows = parse_u16(value)?,
        (Section::Pattern, "frame_delay_ms") => config.pattern.frame_delay_ms = parse_int(value)?,
        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}

/// Parse an unsigned decimal integer, allowing `_` digit separators
fn parse_int(value: &str) -> Result<u32, ConfigError> {
    let mut result: u32 = 0;
    let mut digits = 0usize;

    for ch in value.chars() {
        if ch == '_' {
            continue;
        }
        let digit = ch.to_digit(10).ok_or(ConfigError::InvalidValue)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ConfigError::OutOfRange)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(ConfigError::InvalidValue);
    }
    Ok(result)
}

fn parse_u16(value: &str) -> Result<u16, ConfigError> {
    u16::try_from(parse_int(value)?).map_err(|_| ConfigError::OutOfRange)
}
