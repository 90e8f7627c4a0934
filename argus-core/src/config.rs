//! Configuration surface
//!
//! Everything here is fixed at compile or init time; nothing is
//! runtime-mutable once the controller is constructed.

/// Maximum sensor heads per system
pub const MAX_SENSORS: usize = 8;

/// Maximum analog front-end instances per system
pub const MAX_FRONT_ENDS: usize = 4;

/// Pixel count of the S10077-class sensor heads
pub const DEFAULT_PIXEL_COUNT: usize = 1024;

/// Default start-pulse hold (integration) time
pub const DEFAULT_INTEGRATION_TIME_MS: u32 = 10;

/// Acquisition timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcquisitionConfig {
    /// How long the start pulse is held high, in milliseconds
    ///
    /// This sets the sensor's integration time. It is not adjustable
    /// per acquisition.
    pub integration_time_ms: u32,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            integration_time_ms: DEFAULT_INTEGRATION_TIME_MS,
        }
    }
}

/// Minimum report staging capacity for a given pixel count
///
/// Worst case per sample is five decimal digits plus the trailing
/// comma; the extra 100 bytes cover the frame markers and sensor id.
/// If the pixel count changes, the staging area must be resized with
/// it.
pub const fn staging_capacity(pixel_count: usize) -> usize {
    pixel_count * 6 + 100
}
