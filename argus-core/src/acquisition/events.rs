//! Events delivered into the acquisition controller
//!
//! The platform's conversion-complete interrupt is reified as an
//! explicit event carrying the firing front-end's identity, so the
//! matching logic is an ordinary, testable comparison instead of a
//! HAL-registered free function.

use argus_hal::afe::AfeInstanceId;

/// Asynchronous events the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionEvent {
    /// A front-end instance finished its DMA-fed conversion sequence
    ///
    /// Delivered from interrupt context. The sample buffer is already
    /// fully populated when this fires.
    ConversionCompleted {
        /// Identity of the instance that finished
        instance: AfeInstanceId,
    },
}
