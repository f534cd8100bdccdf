//! Homing to the linear rest limit.
//!
//! The only feedback-terminated motion in the system. Abort is ignored: the
//! rig must always be able to return to a known origin.

use embedded_hal::delay::DelayNs;

use crate::error::{HomingError, Result};
use crate::motor::{PulseDriver, Signal, SignalSource};

use super::{Actuator, Axis, Direction};

impl<DRV, SIG, DELAY> Actuator<DRV, SIG, DELAY>
where
    DRV: PulseDriver,
    SIG: SignalSource,
    DELAY: DelayNs,
{
    /// Drive the linear axis toward rest until the rest limit asserts.
    ///
    /// Returns the number of pulses emitted. If the limit is already asserted
    /// nothing is written to the pins.
    ///
    /// # Errors
    ///
    /// Returns [`HomingError::Timeout`] if the limit is still open after the
    /// configured step cap, or any pin/signal error.
    pub fn home(&mut self) -> Result<u32> {
        if self.is_asserted(Signal::RestLimit)? {
            return Ok(0);
        }

        self.driver_mut()
            .set_direction(Axis::Linear, Direction::TOWARD_REST)?;

        let period = self.homing_period;
        let mut steps = 0;
        loop {
            if steps >= self.homing_max_steps {
                warn!("rest limit not reached after {} steps", steps);
                return Err(HomingError::Timeout { steps }.into());
            }

            self.pulse(&[Axis::Linear], period)?;
            steps += 1;

            if self.is_asserted(Signal::RestLimit)? {
                debug!("rest limit reached after {} steps", steps);
                return Ok(steps);
            }
        }
    }
}
