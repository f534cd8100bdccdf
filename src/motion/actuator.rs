//! Axis motion primitives.
//!
//! Every pulse is `high, wait period, low, wait period`. Abortable moves poll
//! the abort signal before each pulse, never inside one, and leave the axis
//! wherever it stopped.

use embedded_hal::delay::DelayNs;

use crate::config::{Millis, PulsePeriod, RigConfig};
use crate::error::Result;
use crate::motor::{PulseDriver, Signal, SignalSource};

use super::{Axis, Direction, MotionParameters, Outcome};

/// Owner of the rig's outputs, inputs and clock.
///
/// Generic over:
/// - `DRV`: pulse driver (must implement [`PulseDriver`])
/// - `SIG`: input signals (must implement [`SignalSource`])
/// - `DELAY`: delay provider (must implement `DelayNs`)
pub struct Actuator<DRV, SIG, DELAY> {
    /// STEP/DIR outputs.
    driver: DRV,

    /// Abort button and limit switches.
    signals: SIG,

    /// Busy-wait provider for pulse timing.
    delay: DELAY,

    /// Pulse half-period while homing.
    pub(super) homing_period: PulsePeriod,

    /// Homing gives up after this many pulses.
    pub(super) homing_max_steps: u32,
}

impl<DRV, SIG, DELAY> Actuator<DRV, SIG, DELAY>
where
    DRV: PulseDriver,
    SIG: SignalSource,
    DELAY: DelayNs,
{
    /// Create an actuator with the default homing settings.
    pub fn new(driver: DRV, signals: SIG, delay: DELAY) -> Self {
        Self::from_config(driver, signals, delay, &RigConfig::default())
    }

    /// Create an actuator using the homing settings of a rig configuration.
    pub fn from_config(driver: DRV, signals: SIG, delay: DELAY, config: &RigConfig) -> Self {
        Self {
            driver,
            signals,
            delay,
            homing_period: config.timing.homing_pulse,
            homing_max_steps: config.homing.max_steps,
        }
    }

    /// Get the pulse driver.
    #[inline]
    pub fn driver(&self) -> &DRV {
        &self.driver
    }

    /// Get the pulse driver mutably.
    #[inline]
    pub(super) fn driver_mut(&mut self) -> &mut DRV {
        &mut self.driver
    }

    /// Get the signal source.
    #[inline]
    pub fn signals(&self) -> &SIG {
        &self.signals
    }

    /// Get the signal source mutably.
    #[inline]
    pub fn signals_mut(&mut self) -> &mut SIG {
        &mut self.signals
    }

    /// Get the delay provider.
    #[inline]
    pub fn delay(&self) -> &DELAY {
        &self.delay
    }

    /// Release driver, signals and delay.
    pub fn release(self) -> (DRV, SIG, DELAY) {
        (self.driver, self.signals, self.delay)
    }

    /// Read one input signal.
    #[inline]
    pub fn is_asserted(&mut self, signal: Signal) -> Result<bool> {
        self.signals.is_asserted(signal)
    }

    /// Check whether the operator is requesting an abort.
    #[inline]
    pub fn abort_requested(&mut self) -> Result<bool> {
        self.signals.is_asserted(Signal::Abort)
    }

    /// Move one axis, polling abort before every pulse.
    ///
    /// A zero-step move returns `Completed` without touching any pin.
    pub fn move_axis(&mut self, axis: Axis, params: MotionParameters) -> Result<Outcome> {
        if params.is_empty() {
            return Ok(Outcome::Completed);
        }

        self.driver.set_direction(axis, params.direction)?;
        self.run_abortable_pulses(&[axis], params.steps, params.period)
    }

    /// Move one axis without polling abort.
    ///
    /// Used where the abort button may legitimately be held, such as the
    /// staging move right after the operator pressed start.
    pub fn move_axis_uninterruptible(&mut self, axis: Axis, params: MotionParameters) -> Result<()> {
        if params.is_empty() {
            return Ok(());
        }

        self.driver.set_direction(axis, params.direction)?;
        self.run_pulses(&[axis], params.steps, params.period)
    }

    /// Step the linear and rotation axes together, one paired pulse per step.
    ///
    /// Both directions are set once up front. Abort is polled before every
    /// paired pulse.
    pub fn move_paired(
        &mut self,
        linear: Direction,
        rotation: Direction,
        steps: u32,
        period: PulsePeriod,
    ) -> Result<Outcome> {
        if steps == 0 {
            return Ok(Outcome::Completed);
        }

        self.driver.set_direction(Axis::Linear, linear)?;
        self.driver.set_direction(Axis::Rotation, rotation)?;
        self.run_abortable_pulses(&[Axis::Linear, Axis::Rotation], steps, period)
    }

    /// Busy-wait for a fixed time.
    #[inline]
    pub fn wait(&mut self, duration: Millis) {
        self.delay.delay_ms(duration.value());
    }

    /// Emit one pulse on every given axis at once.
    pub(super) fn pulse(&mut self, axes: &[Axis], period: PulsePeriod) -> Result<()> {
        for &axis in axes {
            self.driver.step_high(axis)?;
        }
        self.delay.delay_us(period.as_micros());

        for &axis in axes {
            self.driver.step_low(axis)?;
        }
        self.delay.delay_us(period.as_micros());

        Ok(())
    }

    fn run_pulses(&mut self, axes: &[Axis], steps: u32, period: PulsePeriod) -> Result<()> {
        for _ in 0..steps {
            self.pulse(axes, period)?;
        }
        Ok(())
    }

    fn run_abortable_pulses(
        &mut self,
        axes: &[Axis],
        steps: u32,
        period: PulsePeriod,
    ) -> Result<Outcome> {
        for done in 0..steps {
            if self.abort_requested()? {
                debug!("abort observed after {} of {} steps", done, steps);
                return Ok(Outcome::Aborted);
            }
            self.pulse(axes, period)?;
        }
        Ok(Outcome::Completed)
    }
}
