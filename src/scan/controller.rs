//! Top-level scan controller.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::config::{validate_config, Millis, PulsePeriod, RigConfig};
use crate::error::Result;
use crate::motion::{Actuator, Axis, MotionParameters, Outcome};
use crate::motor::{PulseDriver, Signal, SignalSource};
use crate::path::PathSequencer;

use super::state::{Event, ScanState};

/// Counters kept across scan episodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanStats {
    /// Paths that ran to completion
    pub scans_completed: u32,
    /// Paths abandoned on operator abort
    pub scans_aborted: u32,
    /// Homing runs that reached the rest limit
    pub homing_runs: u32,
}

/// The rig's control loop.
///
/// Owns the actuator exclusively. Each [`tick`](Self::tick) performs the work
/// of the current state, which may block for a whole path, and then applies
/// the resulting event.
pub struct ScanController<DRV, SIG, DELAY> {
    actuator: Actuator<DRV, SIG, DELAY>,
    sequencer: PathSequencer,
    state: ScanState,

    steps_to_start: u32,
    setup_period: PulsePeriod,
    settle_delay: Millis,

    stats: ScanStats,
    last_outcome: Option<Outcome>,
}

impl<DRV, SIG, DELAY> ScanController<DRV, SIG, DELAY>
where
    DRV: PulseDriver,
    SIG: SignalSource,
    DELAY: DelayNs,
{
    /// Validate the configuration and power the controller up.
    ///
    /// The controller starts in `Homing`; no pin is touched until the first
    /// [`tick`](Self::tick).
    pub fn power_on(driver: DRV, signals: SIG, delay: DELAY, config: &RigConfig) -> Result<Self> {
        validate_config(config)?;

        let mut controller = Self {
            actuator: Actuator::from_config(driver, signals, delay, config),
            sequencer: PathSequencer::from_config(config),
            state: ScanState::Idle,
            steps_to_start: config.path.steps_to_start,
            setup_period: config.timing.setup_pulse,
            settle_delay: config.timing.settle_delay,
            stats: ScanStats::default(),
            last_outcome: None,
        };
        controller.apply(Event::PowerOn);
        Ok(controller)
    }

    /// Get the current state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Get the episode counters.
    #[inline]
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Get the actuator.
    #[inline]
    pub fn actuator(&self) -> &Actuator<DRV, SIG, DELAY> {
        &self.actuator
    }

    /// Get the actuator mutably.
    #[inline]
    pub fn actuator_mut(&mut self) -> &mut Actuator<DRV, SIG, DELAY> {
        &mut self.actuator
    }

    /// Get the path sequencer.
    #[inline]
    pub fn sequencer(&self) -> &PathSequencer {
        &self.sequencer
    }

    /// Release driver, signals and delay.
    pub fn release(self) -> (DRV, SIG, DELAY) {
        self.actuator.release()
    }

    /// Run one control-loop iteration and return the new state.
    ///
    /// # Errors
    ///
    /// Pin, signal and homing errors are returned as-is and leave the state
    /// unchanged, so a failed homing run is retried on the next tick.
    pub fn tick(&mut self) -> Result<ScanState> {
        let event = match self.state {
            ScanState::Idle => self.poll_idle()?,
            ScanState::Homing => Some(self.run_homing()?),
            ScanState::Staged => Some(self.run_staging()?),
            ScanState::Scanning => Some(self.run_path()?),
            ScanState::Aborting => Some(Event::AbortHandled),
        };

        if let Some(event) = event {
            self.apply(event);
            // The path ends away from rest; no new scan before the origin is known
            if event == Event::ScanCompleted {
                self.apply(Event::RehomeRequested);
            }
        }

        Ok(self.state)
    }

    /// Tick until an error occurs.
    ///
    /// Returns on the first error, including a homing timeout. The state is
    /// left as it was, so calling `run` again retries the failed step.
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            self.tick()?;
        }
    }

    /// Tick until one scan episode has finished and the controller is idle
    /// again, then report how the path ended.
    ///
    /// Waits for the operator's start request like [`run`](Self::run) does.
    pub fn run_scan(&mut self) -> Result<Outcome> {
        self.last_outcome = None;
        loop {
            if self.tick()? == ScanState::Idle {
                if let Some(outcome) = self.last_outcome.take() {
                    return Ok(outcome);
                }
            }
        }
    }

    fn apply(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next != self.state {
            info!("{:?} -> {:?} ({:?})", self.state, next, event);
            self.state = next;
        }
    }

    fn poll_idle(&mut self) -> Result<Option<Event>> {
        let abort = self.actuator.is_asserted(Signal::Abort)?;
        let push = self.actuator.is_asserted(Signal::PushLimit)?;

        Ok(match (abort, push) {
            (true, true) => Some(Event::StartRequested),
            (true, false) => Some(Event::RehomeRequested),
            _ => None,
        })
    }

    fn run_homing(&mut self) -> Result<Event> {
        let steps = self.actuator.home()?;
        self.stats.homing_runs = self.stats.homing_runs.wrapping_add(1);
        debug!("homed in {} steps", steps);
        Ok(Event::RestReached)
    }

    fn run_staging(&mut self) -> Result<Event> {
        // The operator may still be holding the start/abort button here
        self.actuator.move_axis_uninterruptible(
            Axis::Linear,
            MotionParameters::forward(self.steps_to_start, self.setup_period),
        )?;
        self.actuator.wait(self.settle_delay);
        Ok(Event::StagingDone)
    }

    fn run_path(&mut self) -> Result<Event> {
        let outcome = self.sequencer.run(&mut self.actuator)?;
        self.last_outcome = Some(outcome);

        Ok(match outcome {
            Outcome::Completed => {
                self.stats.scans_completed = self.stats.scans_completed.wrapping_add(1);
                Event::ScanCompleted
            }
            Outcome::Aborted => {
                self.stats.scans_aborted = self.stats.scans_aborted.wrapping_add(1);
                warn!("scan aborted by operator, re-homing");
                Event::ScanAborted
            }
        })
    }
}
