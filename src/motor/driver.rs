//! Step/direction pulse driver.
//!
//! [`PulseDriver`] is the seam between motion sequencing and GPIO.
//! [`PinPulseDriver`] implements it over embedded-hal 1.0 output pins.

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};
use crate::motion::{Axis, Direction};

/// Drives the STEP and DIR lines of the rig's axes.
///
/// Timing is not the driver's concern: callers hold each level for the pulse
/// period themselves.
pub trait PulseDriver {
    /// Set the DIR line of an axis.
    fn set_direction(&mut self, axis: Axis, direction: Direction) -> Result<()>;

    /// Drive the STEP line of an axis high.
    fn step_high(&mut self, axis: Axis) -> Result<()>;

    /// Drive the STEP line of an axis low.
    fn step_low(&mut self, axis: Axis) -> Result<()>;
}

impl<T: PulseDriver + ?Sized> PulseDriver for &mut T {
    fn set_direction(&mut self, axis: Axis, direction: Direction) -> Result<()> {
        (**self).set_direction(axis, direction)
    }

    fn step_high(&mut self, axis: Axis) -> Result<()> {
        (**self).step_high(axis)
    }

    fn step_low(&mut self, axis: Axis) -> Result<()> {
        (**self).step_low(axis)
    }
}

/// STEP/DIR pin pair of one axis.
pub(crate) struct AxisPins<STEP, DIR> {
    /// STEP pin (pulse to move one step).
    pub(crate) step: STEP,

    /// DIR pin (high = forward, unless inverted).
    pub(crate) dir: DIR,

    /// Whether direction pin logic is inverted.
    pub(crate) invert_direction: bool,
}

impl<STEP, DIR> AxisPins<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    fn set_direction(&mut self, axis: Axis, direction: Direction) -> Result<()> {
        if direction.is_forward() != self.invert_direction {
            self.dir.set_high().map_err(|_| MotorError::Pin { axis })?;
        } else {
            self.dir.set_low().map_err(|_| MotorError::Pin { axis })?;
        }
        Ok(())
    }
}

/// Pulse driver over four GPIO outputs.
///
/// Generic over:
/// - `LSTEP`, `LDIR`: linear axis STEP/DIR pins
/// - `RSTEP`, `RDIR`: rotation axis STEP/DIR pins
///
/// Each axis may use a different pin type, which is common on boards where
/// the lines sit on different ports.
pub struct PinPulseDriver<LSTEP, LDIR, RSTEP, RDIR> {
    pub(crate) linear: AxisPins<LSTEP, LDIR>,
    pub(crate) rotation: AxisPins<RSTEP, RDIR>,
}

impl<LSTEP, LDIR, RSTEP, RDIR> PinPulseDriver<LSTEP, LDIR, RSTEP, RDIR>
where
    LSTEP: OutputPin,
    LDIR: OutputPin,
    RSTEP: OutputPin,
    RDIR: OutputPin,
{
    /// Create a builder.
    pub fn builder() -> super::PinPulseDriverBuilder<LSTEP, LDIR, RSTEP, RDIR> {
        super::PinPulseDriverBuilder::new()
    }

    /// Release the pins.
    pub fn release(self) -> (LSTEP, LDIR, RSTEP, RDIR) {
        (
            self.linear.step,
            self.linear.dir,
            self.rotation.step,
            self.rotation.dir,
        )
    }
}

impl<LSTEP, LDIR, RSTEP, RDIR> PulseDriver for PinPulseDriver<LSTEP, LDIR, RSTEP, RDIR>
where
    LSTEP: OutputPin,
    LDIR: OutputPin,
    RSTEP: OutputPin,
    RDIR: OutputPin,
{
    fn set_direction(&mut self, axis: Axis, direction: Direction) -> Result<()> {
        match axis {
            Axis::Linear => self.linear.set_direction(axis, direction),
            Axis::Rotation => self.rotation.set_direction(axis, direction),
        }
    }

    fn step_high(&mut self, axis: Axis) -> Result<()> {
        match axis {
            Axis::Linear => self.linear.step.set_high().map_err(|_| MotorError::Pin { axis })?,
            Axis::Rotation => self.rotation.step.set_high().map_err(|_| MotorError::Pin { axis })?,
        }
        Ok(())
    }

    fn step_low(&mut self, axis: Axis) -> Result<()> {
        match axis {
            Axis::Linear => self.linear.step.set_low().map_err(|_| MotorError::Pin { axis })?,
            Axis::Rotation => self.rotation.step.set_low().map_err(|_| MotorError::Pin { axis })?,
        }
        Ok(())
    }
}
