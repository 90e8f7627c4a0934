//! Start-pulse pin adapter
//!
//! Wraps an `embedded-hal` 1.0 digital output as an infallible
//! `argus-hal` output pin. Only pins whose error type is uninhabited
//! are accepted; on-chip GPIO writes do not fail on the supported
//! targets.

use core::convert::Infallible;

/// An `embedded-hal` output pin used as a sensor start-pulse line
pub struct StartPulsePin<P> {
    pin: P,
}

impl<P> StartPulsePin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin, driving it low to the deasserted state
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> argus_hal::OutputPin for StartPulsePin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        // Error type is uninhabited
        let _ = self.pin.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
    }
}
