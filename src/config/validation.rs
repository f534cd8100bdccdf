//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{PathConfig, RigConfig};

/// Validate a rig configuration.
///
/// Checks:
/// - Pulse periods are non-zero
/// - The start offset lies before the end of the track
/// - Four increments cover exactly the scan span
/// - Rotation step counts are non-zero
/// - No pin is wired twice
/// - The homing cap is non-zero
pub fn validate_config(config: &RigConfig) -> Result<()> {
    validate_timing(config)?;
    validate_path(&config.path)?;
    validate_pins(config)?;

    if config.homing.max_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidHomingLimit));
    }

    Ok(())
}

fn validate_timing(config: &RigConfig) -> Result<()> {
    let periods = [
        ("scan_pulse_us", config.timing.scan_pulse),
        ("setup_pulse_us", config.timing.setup_pulse),
        ("homing_pulse_us", config.timing.homing_pulse),
    ];

    for (name, period) in periods {
        if !period.is_valid() {
            return Err(Error::Config(ConfigError::InvalidPulsePeriod(name)));
        }
    }

    Ok(())
}

fn validate_path(path: &PathConfig) -> Result<()> {
    if path.steps_to_start >= path.steps_to_end {
        return Err(Error::Config(ConfigError::InvalidStartOffset {
            steps_to_start: path.steps_to_start,
            steps_to_end: path.steps_to_end,
        }));
    }

    if path.steps_for_inc.checked_mul(4) != Some(path.scan_span()) {
        return Err(Error::Config(ConfigError::IncrementSpanMismatch {
            steps_for_inc: path.steps_for_inc,
            span: path.scan_span(),
        }));
    }

    if path.steps_for_rot == 0 {
        return Err(Error::Config(ConfigError::InvalidRotation("steps_for_rot")));
    }

    if path.steps_for_part_rot == 0 {
        return Err(Error::Config(ConfigError::InvalidRotation(
            "steps_for_part_rot",
        )));
    }

    // Only approximate on the real rig
    if !path.part_rotations_close_turn() {
        warn!(
            "8 partial rotations ({} steps) do not close a full turn ({} steps)",
            path.steps_for_part_rot.saturating_mul(8),
            path.steps_for_rot
        );
    }

    Ok(())
}

fn validate_pins(config: &RigConfig) -> Result<()> {
    let pins = config.axes.pins();
    for (i, pin) in pins.iter().enumerate() {
        if pins[i + 1..].contains(pin) {
            return Err(Error::Config(ConfigError::DuplicatePin(*pin)));
        }
    }
    Ok(())
}
