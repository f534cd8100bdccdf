//! Unit tests for configuration validation.

use scan_motion::config::{validate_config, RigConfig};
use scan_motion::error::{ConfigError, Error};

/// Test validation of the rig's shipped geometry.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[path]
kind = "incremental"
steps_to_start = 800
steps_to_end = 8000
steps_for_rot = 3200
steps_for_part_rot = 400
steps_for_inc = 1800
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when four increments miss the span.
#[test]
fn test_increment_span_mismatch() {
    let toml_str = r#"
[path]
steps_to_start = 0
steps_to_end = 8000
steps_for_inc = 1800
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::IncrementSpanMismatch {
            steps_for_inc: 1800,
            span: 8000,
        }))
    );
}

/// Test validation fails for a zero rotation.
#[test]
fn test_zero_rotation() {
    let toml_str = r#"
[path]
steps_for_rot = 0
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidRotation("steps_for_rot")))
    );
}

/// Test validation fails for a zero homing period.
#[test]
fn test_zero_homing_period() {
    let toml_str = r#"
[timing]
homing_pulse_us = 0
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPulsePeriod("homing_pulse_us")))
    );
}

/// Test validation fails when two axes share a STEP pin.
#[test]
fn test_shared_step_pin() {
    let toml_str = r#"
[axes.linear]
step_pin = 5
dir_pin = 2

[axes.rotation]
step_pin = 5
dir_pin = 4
"#;

    let config: RigConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::DuplicatePin(5)))
    );
}
