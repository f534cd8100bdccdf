//! Path module for scan-motion.
//!
//! Turns the configured path kind into legs and runs them.

mod plan;
mod sequencer;

pub use plan::{Leg, PathPlan, BLOCK_REPETITIONS, MAX_LEGS};
pub use sequencer::PathSequencer;
