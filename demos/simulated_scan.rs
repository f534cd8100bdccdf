//! Example: one scan of each path on simulated hardware.
//!
//! This example demonstrates how to:
//! - Parse a rig configuration from TOML
//! - Build a `PinPulseDriver` over embedded-hal output pins
//! - Run the scan controller from power-on to the end of a scan
//!
//! Run with: `cargo run --example simulated_scan --features std`

use std::cell::Cell;
use std::rc::Rc;

use scan_motion::{
    config::{parse_config, PathKind},
    error::Result,
    sim::{ScriptedSignals, SignalScript, SimDelay},
    PinPulseDriver, ScanController, Signal,
};

/// Mock output pin that counts rising edges.
struct MockPin {
    state: bool,
    rising_edges: Rc<Cell<u32>>,
}

impl MockPin {
    fn new() -> (Self, Rc<Cell<u32>>) {
        let edges = Rc::new(Cell::new(0));
        (
            Self {
                state: false,
                rising_edges: edges.clone(),
            },
            edges,
        )
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if !self.state {
            self.rising_edges.set(self.rising_edges.get() + 1);
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

const RIG_TOML: &str = r#"
[timing]
scan_pulse_us = 800
setup_pulse_us = 400
settle_delay_ms = 2000

[path]
steps_to_start = 80
steps_to_end = 800
steps_for_rot = 320
steps_for_part_rot = 40
steps_for_inc = 180
"#;

fn scan(kind: PathKind) -> Result<()> {
    let mut config = parse_config(RIG_TOML)?;
    config.path.kind = kind;

    let (linear_step, linear_pulses) = MockPin::new();
    let (rotation_step, rotation_pulses) = MockPin::new();
    let (linear_dir, _) = MockPin::new();
    let (rotation_dir, _) = MockPin::new();

    let driver = PinPulseDriver::builder()
        .from_config(&config)
        .linear_pins(linear_step, linear_dir)
        .rotation_pins(rotation_step, rotation_dir)
        .build()?;

    // Operator presses start at the push limit, rest limit opens for the
    // 200 return steps after the scan.
    let mut rest = vec![true];
    rest.extend(std::iter::repeat(false).take(200));
    rest.push(true);
    let signals = ScriptedSignals::new()
        .with(Signal::Abort, SignalScript::Pattern(vec![true, false]))
        .with(Signal::PushLimit, SignalScript::High)
        .with(Signal::RestLimit, SignalScript::Pattern(rest));

    let mut controller = ScanController::power_on(driver, signals, SimDelay::new(), &config)?;
    let outcome = controller.run_scan()?;

    let elapsed_ms = controller.actuator().delay().total_ns() / 1_000_000;
    println!("{:?} scan: {:?}", kind, outcome);
    println!("  legs:             {}", controller.sequencer().plan().len());
    println!(
        "  scan rate:        {:.0} steps/s",
        config.timing.scan_pulse.steps_per_sec()
    );
    println!("  linear pulses:    {}", linear_pulses.get());
    println!("  rotation pulses:  {}", rotation_pulses.get());
    println!("  simulated time:   {} ms", elapsed_ms);
    println!("  stats:            {:?}\n", controller.stats());

    Ok(())
}

fn main() -> Result<()> {
    println!("=== Simulated Scan Example ===\n");

    for kind in [PathKind::Helical, PathKind::ZigZag, PathKind::Incremental] {
        scan(kind)?;
    }

    Ok(())
}
