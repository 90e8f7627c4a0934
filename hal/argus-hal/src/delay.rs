//! Blocking delay abstraction
//!
//! Used to hold the start pulse high for the configured integration
//! time. The wait is a true blocking delay, not a yield point: the
//! sensor needs the pulse width regardless of what else could run.

/// Trait for a blocking millisecond delay
pub trait DelayMs {
    /// Block the calling context for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
