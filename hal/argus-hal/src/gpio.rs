//! GPIO pin abstractions
//!
//! Digital output traits for the per-sensor start-pulse lines,
//! implemented by chip-specific HALs.

/// Digital output pin
///
/// Implementations handle the actual register manipulation for the
/// specific chip. Pin writes are infallible; chips where GPIO writes
/// can fail do not exist in this system's hardware matrix.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
