//! Simulated hardware for tests and demos (std only).
//!
//! [`SimDriver`] records every pin operation, [`ScriptedSignals`] replays
//! scripted input levels and [`SimDelay`] accounts for time without
//! sleeping.

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::motion::{Axis, Direction};
use crate::motor::{PulseDriver, Signal, SignalSource};

/// One recorded pin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseEvent {
    /// DIR line written.
    Direction(Axis, Direction),
    /// STEP line driven high.
    StepHigh(Axis),
    /// STEP line driven low.
    StepLow(Axis),
}

/// Pulse driver that records instead of toggling pins.
#[derive(Debug, Clone, Default)]
pub struct SimDriver {
    events: Vec<PulseEvent>,
}

impl SimDriver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[PulseEvent] {
        &self.events
    }

    /// Number of pulses emitted on an axis.
    pub fn pulses(&self, axis: Axis) -> usize {
        self.events
            .iter()
            .filter(|e| **e == PulseEvent::StepHigh(axis))
            .count()
    }

    /// Number of pulses emitted on an axis while its DIR line was `direction`.
    pub fn pulses_in(&self, axis: Axis, direction: Direction) -> usize {
        let mut current = None;
        let mut count = 0;
        for event in &self.events {
            match *event {
                PulseEvent::Direction(a, d) if a == axis => current = Some(d),
                PulseEvent::StepHigh(a) if a == axis && current == Some(direction) => count += 1,
                _ => {}
            }
        }
        count
    }

    /// Net displacement of an axis in steps (forward positive).
    pub fn displacement(&self, axis: Axis) -> i64 {
        self.pulses_in(axis, Direction::Forward) as i64
            - self.pulses_in(axis, Direction::Reverse) as i64
    }

    /// Number of pulses where both axes went high together.
    pub fn paired_pulses(&self) -> usize {
        self.events
            .windows(2)
            .filter(|w| {
                w[0] == PulseEvent::StepHigh(Axis::Linear)
                    && w[1] == PulseEvent::StepHigh(Axis::Rotation)
            })
            .count()
    }

    /// Number of DIR writes on an axis.
    pub fn direction_writes(&self, axis: Axis) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PulseEvent::Direction(a, _) if *a == axis))
            .count()
    }
}

impl PulseDriver for SimDriver {
    fn set_direction(&mut self, axis: Axis, direction: Direction) -> Result<()> {
        self.events.push(PulseEvent::Direction(axis, direction));
        Ok(())
    }

    fn step_high(&mut self, axis: Axis) -> Result<()> {
        self.events.push(PulseEvent::StepHigh(axis));
        Ok(())
    }

    fn step_low(&mut self, axis: Axis) -> Result<()> {
        self.events.push(PulseEvent::StepLow(axis));
        Ok(())
    }
}

/// Level schedule of one simulated input, indexed by poll count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignalScript {
    /// Never asserted.
    #[default]
    Low,
    /// Always asserted.
    High,
    /// Open for the first `n` polls, asserted from then on.
    HighAfter(u32),
    /// Asserted for the first `n` polls, open from then on.
    HighFor(u32),
    /// Explicit levels per poll; the last level repeats.
    Pattern(Vec<bool>),
}

impl SignalScript {
    fn level(&self, poll: u32) -> bool {
        match self {
            SignalScript::Low => false,
            SignalScript::High => true,
            SignalScript::HighAfter(n) => poll >= *n,
            SignalScript::HighFor(n) => poll < *n,
            SignalScript::Pattern(levels) => levels
                .get(poll as usize)
                .or(levels.last())
                .copied()
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ScriptedInput {
    script: SignalScript,
    polls: u32,
}

/// Signal source replaying scripted levels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSignals {
    abort: ScriptedInput,
    rest_limit: ScriptedInput,
    push_limit: ScriptedInput,
}

impl ScriptedSignals {
    /// All inputs open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the script of a signal and restart its poll count.
    pub fn set(&mut self, signal: Signal, script: SignalScript) {
        *self.input_mut(signal) = ScriptedInput { script, polls: 0 };
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, signal: Signal, script: SignalScript) -> Self {
        self.set(signal, script);
        self
    }

    /// How often a signal was polled since its script was set.
    pub fn polls(&self, signal: Signal) -> u32 {
        match signal {
            Signal::Abort => self.abort.polls,
            Signal::RestLimit => self.rest_limit.polls,
            Signal::PushLimit => self.push_limit.polls,
        }
    }

    fn input_mut(&mut self, signal: Signal) -> &mut ScriptedInput {
        match signal {
            Signal::Abort => &mut self.abort,
            Signal::RestLimit => &mut self.rest_limit,
            Signal::PushLimit => &mut self.push_limit,
        }
    }
}

impl SignalSource for ScriptedSignals {
    fn is_asserted(&mut self, signal: Signal) -> Result<bool> {
        let input = self.input_mut(signal);
        let level = input.script.level(input.polls);
        input.polls = input.polls.saturating_add(1);
        Ok(level)
    }
}

/// Delay provider that only accounts for elapsed time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimDelay {
    total_ns: u64,
}

impl SimDelay {
    /// Create a delay with zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time in nanoseconds.
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    fn record(&mut self, ns: u64) {
        self.total_ns += ns;
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.record(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(ms as u64 * 1_000_000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_levels() {
        assert!(!SignalScript::HighAfter(2).level(1));
        assert!(SignalScript::HighAfter(2).level(2));
        assert!(SignalScript::HighFor(1).level(0));
        assert!(!SignalScript::HighFor(1).level(1));

        let pattern = SignalScript::Pattern(vec![false, true]);
        assert!(!pattern.level(0));
        assert!(pattern.level(5));
        assert!(!SignalScript::Pattern(Vec::new()).level(0));
    }

    #[test]
    fn test_set_restarts_poll_count() {
        let mut signals = ScriptedSignals::new().with(Signal::Abort, SignalScript::HighAfter(1));
        assert!(!signals.is_asserted(Signal::Abort).unwrap());
        assert!(signals.is_asserted(Signal::Abort).unwrap());

        signals.set(Signal::Abort, SignalScript::HighAfter(1));
        assert_eq!(signals.polls(Signal::Abort), 0);
        assert!(!signals.is_asserted(Signal::Abort).unwrap());
    }

    #[test]
    fn test_direction_aware_counts() {
        let mut driver = SimDriver::new();
        driver.set_direction(Axis::Linear, Direction::Forward).unwrap();
        driver.step_high(Axis::Linear).unwrap();
        driver.step_low(Axis::Linear).unwrap();
        driver.set_direction(Axis::Linear, Direction::Reverse).unwrap();
        for _ in 0..3 {
            driver.step_high(Axis::Linear).unwrap();
            driver.step_low(Axis::Linear).unwrap();
        }

        assert_eq!(driver.pulses(Axis::Linear), 4);
        assert_eq!(driver.pulses_in(Axis::Linear, Direction::Reverse), 3);
        assert_eq!(driver.displacement(Axis::Linear), -2);
        assert_eq!(driver.direction_writes(Axis::Linear), 2);
        assert_eq!(driver.paired_pulses(), 0);
    }
}
