//! Builder pattern for PinPulseDriver.

use embedded_hal::digital::OutputPin;

use crate::config::{AxesConfig, RigConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::{AxisPins, PinPulseDriver};

/// Builder for creating [`PinPulseDriver`] instances.
pub struct PinPulseDriverBuilder<LSTEP, LDIR, RSTEP, RDIR>
where
    LSTEP: OutputPin,
    LDIR: OutputPin,
    RSTEP: OutputPin,
    RDIR: OutputPin,
{
    linear_step: Option<LSTEP>,
    linear_dir: Option<LDIR>,
    rotation_step: Option<RSTEP>,
    rotation_dir: Option<RDIR>,
    invert_linear: bool,
    invert_rotation: bool,
}

impl<LSTEP, LDIR, RSTEP, RDIR> Default for PinPulseDriverBuilder<LSTEP, LDIR, RSTEP, RDIR>
where
    LSTEP: OutputPin,
    LDIR: OutputPin,
    RSTEP: OutputPin,
    RDIR: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<LSTEP, LDIR, RSTEP, RDIR> PinPulseDriverBuilder<LSTEP, LDIR, RSTEP, RDIR>
where
    LSTEP: OutputPin,
    LDIR: OutputPin,
    RSTEP: OutputPin,
    RDIR: OutputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            linear_step: None,
            linear_dir: None,
            rotation_step: None,
            rotation_dir: None,
            invert_linear: false,
            invert_rotation: false,
        }
    }

    /// Set the linear axis STEP and DIR pins.
    pub fn linear_pins(mut self, step: LSTEP, dir: LDIR) -> Self {
        self.linear_step = Some(step);
        self.linear_dir = Some(dir);
        self
    }

    /// Set the rotation axis STEP and DIR pins.
    pub fn rotation_pins(mut self, step: RSTEP, dir: RDIR) -> Self {
        self.rotation_step = Some(step);
        self.rotation_dir = Some(dir);
        self
    }

    /// Set linear direction inversion.
    pub fn invert_linear(mut self, invert: bool) -> Self {
        self.invert_linear = invert;
        self
    }

    /// Set rotation direction inversion.
    pub fn invert_rotation(mut self, invert: bool) -> Self {
        self.invert_rotation = invert;
        self
    }

    /// Take direction inversion from the axis wiring.
    pub fn from_axes_config(self, axes: &AxesConfig) -> Self {
        self.invert_linear(axes.linear.invert_direction)
            .invert_rotation(axes.rotation.invert_direction)
    }

    /// Take direction inversion from a rig configuration.
    pub fn from_config(self, config: &RigConfig) -> Self {
        self.from_axes_config(&config.axes)
    }

    /// Build the PinPulseDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the four pins is missing.
    pub fn build(self) -> Result<PinPulseDriver<LSTEP, LDIR, RSTEP, RDIR>> {
        let missing = |what| Error::Config(ConfigError::MissingComponent(what));

        let linear = AxisPins {
            step: self.linear_step.ok_or_else(|| missing("linear step pin"))?,
            dir: self.linear_dir.ok_or_else(|| missing("linear dir pin"))?,
            invert_direction: self.invert_linear,
        };

        let rotation = AxisPins {
            step: self.rotation_step.ok_or_else(|| missing("rotation step pin"))?,
            dir: self.rotation_dir.ok_or_else(|| missing("rotation dir pin"))?,
            invert_direction: self.invert_rotation,
        };

        Ok(PinPulseDriver { linear, rotation })
    }
}
