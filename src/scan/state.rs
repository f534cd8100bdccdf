//! Scan state machine definition.
//!
//! All controller behavior is a function of the current state and an event.

/// Controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanState {
    /// At rest, polling for a start or re-home request
    #[default]
    Idle,
    /// Driving the linear axis onto the rest limit
    Homing,
    /// Start confirmed, moving to the scan start offset
    Staged,
    /// Running the configured path
    Scanning,
    /// Path was abandoned, re-home pending
    Aborting,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Controller powered up
    PowerOn,
    /// Rest limit asserted after homing
    RestReached,
    /// Abort button and push limit asserted together while idle
    StartRequested,
    /// Abort button alone asserted while idle, or re-home after a scan
    RehomeRequested,
    /// Start offset reached and settle delay elapsed
    StagingDone,
    /// Path returned `Completed`
    ScanCompleted,
    /// Path returned `Aborted`
    ScanAborted,
    /// Abort acknowledged
    AbortHandled,
}

impl ScanState {
    /// Process an event and return the next state.
    ///
    /// Pairs not listed leave the state unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use ScanState::*;

        match (self, event) {
            (Idle, PowerOn) => Homing,
            (Idle, StartRequested) => Staged,
            (Idle, RehomeRequested) => Homing,

            (Homing, RestReached) => Idle,

            (Staged, StagingDone) => Scanning,

            (Scanning, ScanCompleted) => Idle,
            (Scanning, ScanAborted) => Aborting,

            (Aborting, AbortHandled) => Homing,

            (state, _) => state,
        }
    }
}
