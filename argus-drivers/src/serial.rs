//! Serial transmission adapter
//!
//! Exposes any blocking `embedded-io` writer through the `argus-hal`
//! UART TX trait. Short writes are retried until the whole frame is
//! out, matching the single-blocking-write contract of the reporter.

/// An `embedded-io` writer used for report transmission
pub struct BlockingTx<W> {
    inner: W,
}

impl<W> BlockingTx<W>
where
    W: embedded_io::Write,
{
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Release the wrapped writer
    pub fn release(self) -> W {
        self.inner
    }
}

impl<W> argus_hal::UartTx for BlockingTx<W>
where
    W: embedded_io::Write,
{
    type Error = W::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}
