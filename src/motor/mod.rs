//! Motor module for scan-motion.
//!
//! Hardware seams: the step/direction pulse driver and the polled input
//! signals, with embedded-hal 1.0 implementations of both.

mod builder;
mod driver;
mod signals;

pub use builder::PinPulseDriverBuilder;
pub use driver::{PinPulseDriver, PulseDriver};
pub use signals::{PinSignals, Signal, SignalSource};
