//! Unit types for timing quantities.
//!
//! Step counts are plain `u32`; durations get newtypes so a pulse period can
//! never be passed where a settle delay is expected.

use serde::Deserialize;

/// Half-period of a step pulse in microseconds.
///
/// One pulse is high for this long, then low for this long, so the step rate
/// is `1 / (2 * period)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct PulsePeriod(pub u32);

impl PulsePeriod {
    /// Create a pulse period from microseconds.
    #[inline]
    pub const fn from_micros(us: u32) -> Self {
        Self(us)
    }

    /// Get the raw value in microseconds.
    #[inline]
    pub const fn as_micros(self) -> u32 {
        self.0
    }

    /// Whether the period is usable (non-zero).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Full pulse duration (high + low) in microseconds.
    #[inline]
    pub const fn pulse_micros(self) -> u64 {
        self.0 as u64 * 2
    }

    /// Step rate in steps per second.
    #[inline]
    pub fn steps_per_sec(self) -> f32 {
        if self.0 == 0 {
            0.0
        } else {
            1_000_000.0 / self.pulse_micros() as f32
        }
    }
}

/// A plain wait in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}
