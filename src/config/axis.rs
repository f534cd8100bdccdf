//! Axis wiring configuration from TOML.

use serde::Deserialize;

use crate::motion::Axis;

/// Wiring of one stepper axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AxisSpec {
    /// Board pin number of the STEP line.
    pub step_pin: u8,

    /// Board pin number of the DIR line.
    pub dir_pin: u8,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

impl AxisSpec {
    /// Create wiring for one axis.
    pub const fn new(step_pin: u8, dir_pin: u8) -> Self {
        Self {
            step_pin,
            dir_pin,
            invert_direction: false,
        }
    }
}

/// Both driven axes.
///
/// The far rotational motor shares the rotation STEP/DIR lines, so it has no
/// entry of its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AxesConfig {
    /// Linear slider axis.
    #[serde(default = "default_linear")]
    pub linear: AxisSpec,

    /// Near rotational axis.
    #[serde(default = "default_rotation")]
    pub rotation: AxisSpec,
}

fn default_linear() -> AxisSpec {
    AxisSpec::new(3, 2)
}

fn default_rotation() -> AxisSpec {
    AxisSpec::new(5, 4)
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            linear: default_linear(),
            rotation: default_rotation(),
        }
    }
}

impl AxesConfig {
    /// Get the wiring of an axis.
    pub fn get(&self, axis: Axis) -> &AxisSpec {
        match axis {
            Axis::Linear => &self.linear,
            Axis::Rotation => &self.rotation,
        }
    }

    /// All configured pin numbers, linear first.
    pub fn pins(&self) -> [u8; 4] {
        [
            self.linear.step_pin,
            self.linear.dir_pin,
            self.rotation.step_pin,
            self.rotation.dir_pin,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spec_not_inverted() {
        let wiring = AxisSpec::new(3, 2);
        assert!(!wiring.invert_direction);
        assert_eq!(AxesConfig::default().pins(), [3, 2, 5, 4]);
    }

    #[test]
    fn test_lookup_by_axis() {
        let axes = AxesConfig::default();
        assert_eq!(axes.get(Axis::Linear).step_pin, 3);
        assert_eq!(axes.get(Axis::Rotation).dir_pin, 4);
    }
}
