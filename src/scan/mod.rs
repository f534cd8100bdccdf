//! Scan module for scan-motion.
//!
//! The state machine and the controller that drives it.

mod controller;
mod state;

pub use controller::{ScanController, ScanStats};
pub use state::{Event, ScanState};
