//! Rig configuration - root configuration structure.

use serde::Deserialize;

use super::axis::AxesConfig;
use super::path::PathConfig;
use super::timing::TimingConfig;

/// Homing safety settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomingConfig {
    /// Maximum pulses before homing gives up with a timeout.
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

fn default_max_steps() -> u32 {
    100_000
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

/// Root configuration structure from TOML.
///
/// Every table is optional; missing values fall back to the rig's firmware
/// constants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RigConfig {
    /// Axis wiring.
    #[serde(default)]
    pub axes: AxesConfig,

    /// Pulse periods and delays.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Scan geometry and selected path.
    #[serde(default)]
    pub path: PathConfig,

    /// Homing safety cap.
    #[serde(default)]
    pub homing: HomingConfig,
}
