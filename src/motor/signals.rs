//! Operator and limit-switch inputs.

use embedded_hal::digital::InputPin;

use crate::error::{MotorError, Result};

/// A polled digital input of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Operator abort button (also the start button while idle).
    Abort,
    /// Limit switch at the linear rest position.
    RestLimit,
    /// Limit switch confirming the rig is pushed into the ready position.
    PushLimit,
}

/// Source of polled boolean inputs.
///
/// `true` means asserted. Implementations must not block.
pub trait SignalSource {
    /// Read one signal.
    fn is_asserted(&mut self, signal: Signal) -> Result<bool>;
}

impl<T: SignalSource + ?Sized> SignalSource for &mut T {
    fn is_asserted(&mut self, signal: Signal) -> Result<bool> {
        (**self).is_asserted(signal)
    }
}

/// Signal source over three active-high GPIO inputs.
pub struct PinSignals<ABORT, REST, PUSH> {
    abort: ABORT,
    rest_limit: REST,
    push_limit: PUSH,
}

impl<ABORT, REST, PUSH> PinSignals<ABORT, REST, PUSH>
where
    ABORT: InputPin,
    REST: InputPin,
    PUSH: InputPin,
{
    /// Create a signal source from the three input pins.
    pub fn new(abort: ABORT, rest_limit: REST, push_limit: PUSH) -> Self {
        Self {
            abort,
            rest_limit,
            push_limit,
        }
    }

    /// Release the pins.
    pub fn release(self) -> (ABORT, REST, PUSH) {
        (self.abort, self.rest_limit, self.push_limit)
    }
}

impl<ABORT, REST, PUSH> SignalSource for PinSignals<ABORT, REST, PUSH>
where
    ABORT: InputPin,
    REST: InputPin,
    PUSH: InputPin,
{
    fn is_asserted(&mut self, signal: Signal) -> Result<bool> {
        let level = match signal {
            Signal::Abort => self.abort.is_high().map_err(|_| MotorError::Signal(signal))?,
            Signal::RestLimit => self
                .rest_limit
                .is_high()
                .map_err(|_| MotorError::Signal(signal))?,
            Signal::PushLimit => self
                .push_limit
                .is_high()
                .map_err(|_| MotorError::Signal(signal))?,
        };
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::MockError;

    #[test]
    fn test_reads_each_input() {
        let abort = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let rest = PinMock::new(&[PinTransaction::get(PinState::Low)]);
        let push = PinMock::new(&[PinTransaction::get(PinState::High)]);

        let mut signals = PinSignals::new(abort, rest, push);
        assert!(signals.is_asserted(Signal::Abort).unwrap());
        assert!(!signals.is_asserted(Signal::RestLimit).unwrap());
        assert!(signals.is_asserted(Signal::PushLimit).unwrap());

        let (mut abort, mut rest, mut push) = signals.release();
        abort.done();
        rest.done();
        push.done();
    }

    #[test]
    fn test_read_failure_names_signal() {
        let abort = PinMock::new(&[]);
        let rest = PinMock::new(&[PinTransaction::get(PinState::High)
            .with_error(MockError::Io(std::io::ErrorKind::BrokenPipe))]);
        let push = PinMock::new(&[]);

        let mut signals = PinSignals::new(abort, rest, push);
        assert_eq!(
            signals.is_asserted(Signal::RestLimit),
            Err(Error::Motor(MotorError::Signal(Signal::RestLimit)))
        );

        let (mut abort, mut rest, mut push) = signals.release();
        abort.done();
        rest.done();
        push.done();
    }
}
