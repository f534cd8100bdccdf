//! Path execution.

use embedded_hal::delay::DelayNs;

use crate::config::{PathConfig, PulsePeriod, RigConfig};
use crate::error::Result;
use crate::motion::{Actuator, Outcome};
use crate::motor::{PulseDriver, SignalSource};

use super::plan::{Leg, PathPlan};

/// Runs a path plan leg by leg on an actuator.
///
/// The first aborted leg abandons the whole path. There is no resume: the
/// caller re-homes.
#[derive(Debug, Clone)]
pub struct PathSequencer {
    plan: PathPlan,
}

impl PathSequencer {
    /// Create a sequencer for the configured path at a scan pulse period.
    pub fn new(path: &PathConfig, period: PulsePeriod) -> Self {
        Self::from_plan(PathPlan::for_config(path, period))
    }

    /// Create a sequencer for the path and scan period of a rig configuration.
    pub fn from_config(config: &RigConfig) -> Self {
        Self::new(&config.path, config.timing.scan_pulse)
    }

    /// Create a sequencer for a prebuilt plan.
    pub fn from_plan(plan: PathPlan) -> Self {
        Self { plan }
    }

    /// The plan being executed.
    #[inline]
    pub fn plan(&self) -> &PathPlan {
        &self.plan
    }

    /// Execute every leg in order.
    ///
    /// Returns `Aborted` as soon as any leg observes the abort signal,
    /// otherwise `Completed` after the last leg.
    pub fn run<DRV, SIG, DELAY>(&self, actuator: &mut Actuator<DRV, SIG, DELAY>) -> Result<Outcome>
    where
        DRV: PulseDriver,
        SIG: SignalSource,
        DELAY: DelayNs,
    {
        let total = self.plan.len();
        info!("starting {:?} path, {} legs", self.plan.kind(), total);

        for (index, leg) in self.plan.legs().iter().enumerate() {
            debug!("leg {} of {}: {:?}", index + 1, total, leg);

            let outcome = match *leg {
                Leg::Single { axis, motion } => actuator.move_axis(axis, motion)?,
                Leg::Paired { linear, rotation } => actuator.move_paired(
                    linear.direction,
                    rotation.direction,
                    linear.steps,
                    linear.period,
                )?,
            };

            if outcome.is_aborted() {
                warn!("{:?} path aborted during leg {}", self.plan.kind(), index + 1);
                return Ok(Outcome::Aborted);
            }
        }

        info!("{:?} path completed", self.plan.kind());
        Ok(Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathKind;
    use crate::motion::{Axis, Direction};
    use crate::motor::Signal;
    use crate::sim::{ScriptedSignals, SignalScript, SimDelay, SimDriver};

    fn small_path(kind: PathKind) -> PathConfig {
        PathConfig {
            kind,
            steps_to_start: 4,
            steps_to_end: 20,
            steps_for_rot: 16,
            steps_for_part_rot: 2,
            steps_for_inc: 4,
        }
    }

    fn actuator(signals: ScriptedSignals) -> Actuator<SimDriver, ScriptedSignals, SimDelay> {
        Actuator::new(SimDriver::new(), signals, SimDelay::new())
    }

    #[test]
    fn test_helical_completes_with_paired_pulses() {
        let seq = PathSequencer::new(&small_path(PathKind::Helical), PulsePeriod(10));
        let mut act = actuator(ScriptedSignals::new());

        assert_eq!(seq.run(&mut act).unwrap(), Outcome::Completed);
        assert_eq!(act.driver().paired_pulses(), 20);
        assert_eq!(act.driver().pulses(Axis::Linear), 20);
        assert_eq!(act.driver().pulses(Axis::Rotation), 20);
    }

    #[test]
    fn test_zig_zag_pulses_match_plan() {
        let seq = PathSequencer::new(&small_path(PathKind::ZigZag), PulsePeriod(10));
        let mut act = actuator(ScriptedSignals::new());

        assert_eq!(seq.run(&mut act).unwrap(), Outcome::Completed);
        let driver = act.driver();
        assert_eq!(driver.pulses_in(Axis::Linear, Direction::Forward), 80);
        assert_eq!(driver.pulses_in(Axis::Linear, Direction::Reverse), 80);
        assert_eq!(driver.displacement(Axis::Linear), 0);
        assert_eq!(driver.pulses(Axis::Rotation), 16);
        // Direction is written once per leg
        assert_eq!(driver.direction_writes(Axis::Linear), 8);
        assert_eq!(driver.direction_writes(Axis::Rotation), 8);
    }

    #[test]
    fn test_incremental_ends_on_rotation() {
        let seq = PathSequencer::new(&small_path(PathKind::Incremental), PulsePeriod(10));
        let mut act = actuator(ScriptedSignals::new());

        assert_eq!(seq.run(&mut act).unwrap(), Outcome::Completed);
        assert_eq!(act.driver().pulses(Axis::Linear), 16);
        assert_eq!(act.driver().pulses(Axis::Rotation), 5 * 16);
    }

    #[test]
    fn test_abort_abandons_remaining_legs() {
        let seq = PathSequencer::new(&small_path(PathKind::ZigZag), PulsePeriod(10));
        // First leg (20 pulses) completes, abort seen after one pulse of the second
        let signals = ScriptedSignals::new().with(Signal::Abort, SignalScript::HighAfter(21));
        let mut act = actuator(signals);

        assert_eq!(seq.run(&mut act).unwrap(), Outcome::Aborted);
        assert_eq!(act.driver().pulses(Axis::Linear), 20);
        assert_eq!(act.driver().pulses(Axis::Rotation), 1);
        // No leg after the aborted one set a direction
        assert_eq!(act.driver().direction_writes(Axis::Linear), 1);
    }
}
