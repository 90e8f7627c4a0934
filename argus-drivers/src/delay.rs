//! Blocking delay adapter
//!
//! Exposes any `embedded-hal` `DelayNs` implementation through the
//! millisecond delay trait the acquisition controller holds.

/// An `embedded-hal` delay used for the integration-time hold
pub struct SystemDelay<D> {
    inner: D,
}

impl<D> SystemDelay<D>
where
    D: embedded_hal::delay::DelayNs,
{
    /// Wrap a delay provider
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D> argus_hal::DelayMs for SystemDelay<D>
where
    D: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_hal::DelayMs as _;

    struct TestDelay {
        total_ns: u64,
    }

    impl embedded_hal::delay::DelayNs for TestDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_milliseconds_forwarded() {
        let mut delay = SystemDelay::new(TestDelay { total_ns: 0 });
        delay.delay_ms(10);
        assert_eq!(delay.inner.total_ns, 10_000_000);
    }
}
