//! Pixel-clock generator abstraction
//!
//! The sensor heads share one continuous clock waveform that shifts
//! pixels out. It is started once during system bring-up and runs for
//! the life of the process; the acquisition core never stops it.

/// Trait for the shared pixel-clock generator
///
/// Typically backed by a timer in PWM mode.
pub trait ClockGenerator {
    /// Error type for clock operations
    type Error;

    /// Start the continuous periodic output
    ///
    /// Called once at system init. Failure here is fatal to the whole
    /// acquisition system.
    fn start_periodic_output(&mut self) -> Result<(), Self::Error>;
}
