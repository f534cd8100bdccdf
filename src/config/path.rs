//! Scan path configuration from TOML.

use serde::Deserialize;

/// Which of the fixed scan paths the rig runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Linear and rotation stepped together: a continuous spiral.
    #[default]
    Helical,
    /// Full-length sweeps back and forth with partial rotations between.
    ZigZag,
    /// Full rotations with short linear advances between.
    Incremental,
}

/// Step counts that define the scan geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathConfig {
    /// Selected path, fixed for the lifetime of the controller.
    #[serde(default)]
    pub kind: PathKind,

    /// Linear steps from rest to the scan start position.
    #[serde(default = "default_steps_to_start")]
    pub steps_to_start: u32,

    /// Linear steps of a full-length sweep.
    #[serde(default = "default_steps_to_end")]
    pub steps_to_end: u32,

    /// Rotation steps of one full turn.
    #[serde(default = "default_steps_for_rot")]
    pub steps_for_rot: u32,

    /// Rotation steps between zig-zag sweeps.
    #[serde(default = "default_steps_for_part_rot")]
    pub steps_for_part_rot: u32,

    /// Linear steps between incremental turns.
    #[serde(default = "default_steps_for_inc")]
    pub steps_for_inc: u32,
}

fn default_steps_to_start() -> u32 {
    800
}

fn default_steps_to_end() -> u32 {
    8000
}

fn default_steps_for_rot() -> u32 {
    3200
}

fn default_steps_for_part_rot() -> u32 {
    400
}

fn default_steps_for_inc() -> u32 {
    1800
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            kind: PathKind::default(),
            steps_to_start: default_steps_to_start(),
            steps_to_end: default_steps_to_end(),
            steps_for_rot: default_steps_for_rot(),
            steps_for_part_rot: default_steps_for_part_rot(),
            steps_for_inc: default_steps_for_inc(),
        }
    }
}

impl PathConfig {
    /// Linear travel covered by the incremental path.
    ///
    /// Saturates to zero when the start offset is past the end.
    pub fn scan_span(&self) -> u32 {
        self.steps_to_end.saturating_sub(self.steps_to_start)
    }

    /// Whether eight partial rotations make exactly one full turn.
    pub fn part_rotations_close_turn(&self) -> bool {
        self.steps_for_part_rot.checked_mul(8) == Some(self.steps_for_rot)
    }

    /// Same config with another path selected.
    pub fn with_kind(mut self, kind: PathKind) -> Self {
        self.kind = kind;
        self
    }
}
