//! Property tests for path plans over arbitrary valid geometries.

use proptest::prelude::*;

use scan_motion::config::{validate_config, PathConfig, PathKind, PulsePeriod, RigConfig};
use scan_motion::sim::{ScriptedSignals, SignalScript, SimDelay, SimDriver};
use scan_motion::{Actuator, Axis, Direction, Leg, Outcome, PathPlan, PathSequencer, Signal};

const PERIOD: PulsePeriod = PulsePeriod(1);

prop_compose! {
    fn valid_path(max: u32)(
        steps_to_start in 0..max,
        steps_for_inc in 1..max,
        steps_for_rot in 1..max,
        steps_for_part_rot in 1..max,
    ) -> PathConfig {
        PathConfig {
            kind: PathKind::Helical,
            steps_to_start,
            steps_to_end: steps_to_start + 4 * steps_for_inc,
            steps_for_rot,
            steps_for_part_rot,
            steps_for_inc,
        }
    }
}

fn run(path: &PathConfig, abort: SignalScript) -> (Outcome, SimDriver) {
    let signals = ScriptedSignals::new().with(Signal::Abort, abort);
    let mut actuator = Actuator::new(SimDriver::new(), signals, SimDelay::new());
    let outcome = PathSequencer::new(path, PERIOD)
        .run(&mut actuator)
        .expect("simulated hardware does not fail");
    let (driver, _, _) = actuator.release();
    (outcome, driver)
}

proptest! {
    #[test]
    fn generated_paths_validate(path in valid_path(10_000)) {
        let config = RigConfig { path, ..RigConfig::default() };
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zig_zag_conserves_linear_steps(path in valid_path(10_000)) {
        let plan = PathPlan::zig_zag(&path, PERIOD);
        let sweeps = 4 * path.steps_to_end as u64;

        prop_assert_eq!(plan.steps(Axis::Linear, Direction::Forward), sweeps);
        prop_assert_eq!(plan.steps(Axis::Linear, Direction::Reverse), sweeps);
        prop_assert_eq!(plan.displacement(Axis::Linear), 0);
        prop_assert_eq!(
            plan.steps(Axis::Rotation, Direction::Forward),
            8 * path.steps_for_part_rot as u64
        );
    }

    #[test]
    fn incremental_covers_span(path in valid_path(10_000)) {
        let plan = PathPlan::incremental(&path, PERIOD);

        prop_assert_eq!(
            plan.steps(Axis::Linear, Direction::Forward),
            path.scan_span() as u64
        );
        prop_assert_eq!(plan.full_rotations(path.steps_for_rot), 5);
        let last = plan.legs().last().copied();
        let ends_on_rotation = matches!(last, Some(Leg::Single { axis: Axis::Rotation, .. }));
        prop_assert!(ends_on_rotation);
    }

    #[test]
    fn executed_pulses_match_plan(path in valid_path(40), kind_index in 0usize..3) {
        let kind = [PathKind::Helical, PathKind::ZigZag, PathKind::Incremental][kind_index];
        let path = path.with_kind(kind);
        let plan = PathPlan::for_config(&path, PERIOD);

        let (outcome, driver) = run(&path, SignalScript::Low);

        prop_assert_eq!(outcome, Outcome::Completed);
        for axis in [Axis::Linear, Axis::Rotation] {
            for direction in [Direction::Forward, Direction::Reverse] {
                prop_assert_eq!(
                    driver.pulses_in(axis, direction) as u64,
                    plan.steps(axis, direction)
                );
            }
        }
    }

    #[test]
    fn helical_abort_stops_after_k_pairs(path in valid_path(40), k in 0u32..160) {
        let k = k % path.steps_to_end.max(1);
        let (outcome, driver) = run(&path, SignalScript::HighAfter(k));

        prop_assert_eq!(outcome, Outcome::Aborted);
        prop_assert_eq!(driver.paired_pulses(), k as usize);
        prop_assert_eq!(driver.pulses(Axis::Rotation), k as usize);
    }
}
