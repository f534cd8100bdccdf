//! Configuration module for scan-motion.
//!
//! Provides types for loading and validating the rig configuration from TOML
//! files (with `std` feature) or from compiled-in defaults.

mod axis;
mod path;
mod rig;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::{AxesConfig, AxisSpec};
pub use path::{PathConfig, PathKind};
pub use rig::{HomingConfig, RigConfig};
pub use timing::TimingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millis, PulsePeriod};
