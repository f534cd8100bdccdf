//! Path plans: the fixed leg topologies of the three scan paths.

use heapless::Vec;

use crate::config::{PathConfig, PathKind, PulsePeriod};
use crate::motion::{Axis, Direction, MotionParameters};

/// Maximum number of legs in a plan (zig-zag needs 16).
pub const MAX_LEGS: usize = 16;

/// How often the zig-zag and incremental blocks repeat.
pub const BLOCK_REPETITIONS: u32 = 4;

/// One leg of a plan. Directions are set once at the start of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Leg {
    /// Motion on one axis.
    Single {
        /// Axis to move.
        axis: Axis,
        /// Steps, period and direction.
        motion: MotionParameters,
    },
    /// Both axes stepped together, one paired pulse per step.
    Paired {
        /// Linear part.
        linear: MotionParameters,
        /// Rotation part (same steps and period as `linear`).
        rotation: MotionParameters,
    },
}

impl Leg {
    /// Single-axis leg.
    pub const fn single(axis: Axis, motion: MotionParameters) -> Self {
        Leg::Single { axis, motion }
    }

    /// Phase-locked leg on both axes.
    pub const fn paired(
        steps: u32,
        period: PulsePeriod,
        linear: Direction,
        rotation: Direction,
    ) -> Self {
        Leg::Paired {
            linear: MotionParameters::new(steps, period, linear),
            rotation: MotionParameters::new(steps, period, rotation),
        }
    }

    /// Motion this leg requests on an axis, if any.
    pub fn motion_on(&self, axis: Axis) -> Option<MotionParameters> {
        match *self {
            Leg::Single { axis: a, motion } if a == axis => Some(motion),
            Leg::Single { .. } => None,
            Leg::Paired { linear, rotation } => Some(match axis {
                Axis::Linear => linear,
                Axis::Rotation => rotation,
            }),
        }
    }

    /// Whether this leg moves an axis.
    pub fn moves(&self, axis: Axis) -> bool {
        self.motion_on(axis).map(|m| !m.is_empty()).unwrap_or(false)
    }
}

/// An ordered sequence of legs for one of the fixed path kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPlan {
    kind: PathKind,
    legs: Vec<Leg, MAX_LEGS>,
}

impl PathPlan {
    /// Build the plan of the configured path kind.
    pub fn for_config(path: &PathConfig, period: PulsePeriod) -> Self {
        match path.kind {
            PathKind::Helical => Self::helical(path, period),
            PathKind::ZigZag => Self::zig_zag(path, period),
            PathKind::Incremental => Self::incremental(path, period),
        }
    }

    /// One paired leg of `steps_to_end` steps: a continuous spiral.
    pub fn helical(path: &PathConfig, period: PulsePeriod) -> Self {
        let mut plan = Self::empty(PathKind::Helical);
        plan.push(Leg::paired(
            path.steps_to_end,
            period,
            Direction::Forward,
            Direction::Forward,
        ));
        plan
    }

    /// Sweep out, turn a little, sweep back, turn a little; four times.
    pub fn zig_zag(path: &PathConfig, period: PulsePeriod) -> Self {
        let mut plan = Self::empty(PathKind::ZigZag);
        let part_rot = MotionParameters::forward(path.steps_for_part_rot, period);

        for _ in 0..BLOCK_REPETITIONS {
            plan.push(Leg::single(
                Axis::Linear,
                MotionParameters::forward(path.steps_to_end, period),
            ));
            plan.push(Leg::single(Axis::Rotation, part_rot));
            plan.push(Leg::single(
                Axis::Linear,
                MotionParameters::reverse(path.steps_to_end, period),
            ));
            plan.push(Leg::single(Axis::Rotation, part_rot));
        }
        plan
    }

    /// Full turn, short advance; four times, then one trailing full turn.
    pub fn incremental(path: &PathConfig, period: PulsePeriod) -> Self {
        let mut plan = Self::empty(PathKind::Incremental);
        let full_rot = MotionParameters::forward(path.steps_for_rot, period);

        for _ in 0..BLOCK_REPETITIONS {
            plan.push(Leg::single(Axis::Rotation, full_rot));
            plan.push(Leg::single(
                Axis::Linear,
                MotionParameters::forward(path.steps_for_inc, period),
            ));
        }
        plan.push(Leg::single(Axis::Rotation, full_rot));
        plan
    }

    fn empty(kind: PathKind) -> Self {
        Self {
            kind,
            legs: Vec::new(),
        }
    }

    fn push(&mut self, leg: Leg) {
        let pushed = self.legs.push(leg);
        debug_assert!(pushed.is_ok(), "plan exceeds MAX_LEGS");
    }

    /// The path kind this plan was built for.
    #[inline]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Legs in execution order.
    #[inline]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    #[inline]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Whether the plan has no legs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Total steps requested on an axis in one direction.
    pub fn steps(&self, axis: Axis, direction: Direction) -> u64 {
        self.legs
            .iter()
            .filter_map(|leg| leg.motion_on(axis))
            .filter(|m| m.direction == direction)
            .map(|m| m.steps as u64)
            .sum()
    }

    /// Net displacement of an axis over the whole plan.
    pub fn displacement(&self, axis: Axis) -> i64 {
        self.steps(axis, Direction::Forward) as i64 - self.steps(axis, Direction::Reverse) as i64
    }

    /// Number of full turns for a given steps-per-turn.
    pub fn full_rotations(&self, steps_for_rot: u32) -> u64 {
        if steps_for_rot == 0 {
            return 0;
        }
        self.steps(Axis::Rotation, Direction::Forward) / steps_for_rot as u64
    }
}
