//! # scan-motion
//!
//! Motion sequencing for a three-axis stepper scanning rig with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Pins, timing and path geometry from TOML files
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `InputPin` for the
//!   abort button and limit switches, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Three scan paths**: Helical, zig-zag and incremental
//! - **Cooperative abort**: Checked before every pulse, recovered by re-homing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scan_motion::{PinPulseDriver, PinSignals, ScanController};
//!
//! let config = scan_motion::load_config("rig.toml")?;
//!
//! let driver = PinPulseDriver::builder()
//!     .from_config(&config)
//!     .linear_pins(linear_step, linear_dir)
//!     .rotation_pins(rotation_step, rotation_dir)
//!     .build()?;
//! let signals = PinSignals::new(abort_button, rest_limit, push_limit);
//!
//! let mut controller = ScanController::power_on(driver, signals, delay, &config)?;
//! controller.run()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and the `sim` module
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(all(not(feature = "std"), test))]
#[macro_use]
extern crate std;

// Must come first so the logging macros are visible everywhere
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod path;
pub mod scan;

#[cfg(any(feature = "std", test))]
pub mod sim;

// Re-exports for ergonomic API
pub use config::{validate_config, PathKind, RigConfig};
pub use error::{Error, Result};
pub use motion::{Actuator, Axis, Direction, MotionParameters, Outcome};
pub use motor::{PinPulseDriver, PinSignals, PulseDriver, Signal, SignalSource};
pub use path::{Leg, PathPlan, PathSequencer};
pub use scan::{ScanController, ScanState, ScanStats};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millis, PulsePeriod};
