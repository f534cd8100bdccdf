//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::RigConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use scan_motion::load_config;
///
/// let config = load_config("rig.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RigConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<RigConfig> {
    let config: RigConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    debug!(
        "loaded rig config: path {:?}, {} steps to end",
        config.path.kind,
        config.path.steps_to_end
    );

    Ok(config)
}

// Keep as much of the message as fits instead of dropping it entirely.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathKind;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RigConfig::default());
    }

    #[test]
    fn test_parse_path_selection() {
        let toml = r#"
[path]
kind = "zig_zag"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.path.kind, PathKind::ZigZag);
        assert_eq!(config.path.steps_to_end, 8000);
    }

    #[test]
    fn test_parse_rejects_inconsistent_geometry() {
        let toml = r#"
[path]
steps_to_start = 1000
steps_to_end = 5000
steps_for_inc = 1800
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::IncrementSpanMismatch { .. }))
        ));
    }

    #[test]
    fn test_parse_error_keeps_message() {
        let result = parse_config("[timing]\nscan_pulse_us = \"fast\"");
        match result {
            Err(Error::Config(ConfigError::ParseError(msg))) => assert!(!msg.is_empty()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("/nonexistent/rig.toml");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }

    #[test]
    fn test_truncated_long_message() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
    }
}
