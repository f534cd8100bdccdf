//! Motion module for scan-motion.
//!
//! Provides the per-axis pulse primitives and homing.

mod actuator;
mod homing;

pub use actuator::Actuator;

use crate::config::PulsePeriod;

/// A driven axis of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Linear slider carrying the sensor head.
    Linear,
    /// Near rotational axis (the far motor is slaved to it).
    Rotation,
}

/// Direction of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Away from rest on the linear axis.
    Forward,
    /// Toward rest on the linear axis.
    Reverse,
}

impl Direction {
    /// Direction that drives the linear axis onto the rest limit.
    pub const TOWARD_REST: Self = Direction::Reverse;

    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Whether this is the forward direction.
    #[inline]
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// How a motion request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Outcome {
    /// Every requested pulse was emitted.
    Completed,
    /// The abort signal was observed before a pulse.
    Aborted,
}

impl Outcome {
    /// Check if the motion was aborted.
    #[inline]
    pub fn is_aborted(self) -> bool {
        self == Outcome::Aborted
    }
}

/// One leg's worth of motion on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionParameters {
    /// Number of step pulses.
    pub steps: u32,
    /// Pulse half-period.
    pub period: PulsePeriod,
    /// Direction, set once before pulsing.
    pub direction: Direction,
}

impl MotionParameters {
    /// Create new motion parameters.
    #[inline]
    pub const fn new(steps: u32, period: PulsePeriod, direction: Direction) -> Self {
        Self {
            steps,
            period,
            direction,
        }
    }

    /// Forward motion.
    #[inline]
    pub const fn forward(steps: u32, period: PulsePeriod) -> Self {
        Self::new(steps, period, Direction::Forward)
    }

    /// Reverse motion.
    #[inline]
    pub const fn reverse(steps: u32, period: PulsePeriod) -> Self {
        Self::new(steps, period, Direction::Reverse)
    }

    /// Signed displacement in steps.
    #[inline]
    pub fn displacement(&self) -> i64 {
        self.steps as i64 * self.direction.sign()
    }

    /// Whether this leg emits no pulses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}
