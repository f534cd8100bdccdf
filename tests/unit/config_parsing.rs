//! Unit tests for configuration parsing.

use scan_motion::config::{parse_config, PathKind, PulsePeriod, RigConfig};
use scan_motion::error::{ConfigError, Error};
use scan_motion::Millis;

const FULL_CONFIG: &str = r#"
[axes.linear]
step_pin = 7
dir_pin = 6
invert_direction = true

[axes.rotation]
step_pin = 9
dir_pin = 8

[timing]
scan_pulse_us = 1000
setup_pulse_us = 500
homing_pulse_us = 300
settle_delay_ms = 1500

[path]
kind = "zig_zag"
steps_to_start = 400
steps_to_end = 4400
steps_for_rot = 1600
steps_for_part_rot = 200
steps_for_inc = 1000

[homing]
max_steps = 20000
"#;

/// Test that every table of a full file is read.
#[test]
fn test_parse_full_config() {
    let config = parse_config(FULL_CONFIG).expect("Failed to parse config");

    assert_eq!(config.axes.linear.step_pin, 7);
    assert_eq!(config.axes.linear.dir_pin, 6);
    assert!(config.axes.linear.invert_direction);
    assert!(!config.axes.rotation.invert_direction);

    assert_eq!(config.timing.scan_pulse, PulsePeriod(1000));
    assert_eq!(config.timing.setup_pulse, PulsePeriod(500));
    assert_eq!(config.timing.homing_pulse, PulsePeriod(300));
    assert_eq!(config.timing.settle_delay, Millis(1500));

    assert_eq!(config.path.kind, PathKind::ZigZag);
    assert_eq!(config.path.scan_span(), 4000);
    assert_eq!(config.homing.max_steps, 20000);
}

/// Test that missing tables fall back to the rig's firmware constants.
#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_config("[path]\nkind = \"incremental\"\n").expect("Failed to parse config");

    assert_eq!(config.path.kind, PathKind::Incremental);
    assert_eq!(config.path.steps_to_end, 8000);
    assert_eq!(config.timing, RigConfig::default().timing);
}

/// Test that unknown path kinds are rejected.
#[test]
fn test_unknown_path_kind() {
    let result = parse_config("[path]\nkind = \"spiral\"\n");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that parsed configs are validated.
#[test]
fn test_parse_runs_validation() {
    let result = parse_config("[timing]\nscan_pulse_us = 0\n");
    assert_eq!(
        result.unwrap_err(),
        Error::Config(ConfigError::InvalidPulsePeriod("scan_pulse_us"))
    );
}

/// Test loading from a file that does not exist.
#[test]
fn test_load_missing_file() {
    let result = scan_motion::load_config("/nonexistent/rig.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
