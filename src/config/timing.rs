//! Pulse timing configuration.

use serde::Deserialize;

use super::units::{Millis, PulsePeriod};

/// Pulse periods and delays used across a scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Pulse half-period while scanning.
    #[serde(rename = "scan_pulse_us", default = "default_scan_pulse")]
    pub scan_pulse: PulsePeriod,

    /// Pulse half-period for the staging move to the start offset.
    #[serde(rename = "setup_pulse_us", default = "default_setup_pulse")]
    pub setup_pulse: PulsePeriod,

    /// Pulse half-period while homing.
    #[serde(rename = "homing_pulse_us", default = "default_setup_pulse")]
    pub homing_pulse: PulsePeriod,

    /// Wait after staging so the capture system can arm.
    #[serde(rename = "settle_delay_ms", default = "default_settle_delay")]
    pub settle_delay: Millis,
}

fn default_scan_pulse() -> PulsePeriod {
    PulsePeriod(800)
}

fn default_setup_pulse() -> PulsePeriod {
    PulsePeriod(400)
}

fn default_settle_delay() -> Millis {
    Millis(2000)
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            scan_pulse: default_scan_pulse(),
            setup_pulse: default_setup_pulse(),
            homing_pulse: default_setup_pulse(),
            settle_delay: default_settle_delay(),
        }
    }
}
