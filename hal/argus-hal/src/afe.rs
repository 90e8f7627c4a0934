//! Analog front-end abstractions
//!
//! An analog front-end (AFE) is an ADC instance with a DMA channel and a
//! hardware trigger input. Several sensor heads may share one AFE on
//! different input channels, or use distinct AFE instances; the
//! acquisition core reroutes channel and trigger selection per
//! acquisition and never touches chip registers itself.
//!
//! Which register fields implement trigger rerouting differs between
//! hardware variants. Implementations hide that entirely behind
//! [`AnalogFrontEnd::select_trigger`].

/// Identity of one analog front-end instance.
///
/// Completion events carry this identity so the acquisition core can
/// tell whether a finishing conversion belongs to the sensor it is
/// currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AfeInstanceId(pub u8);

/// Input channel on an analog front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelId(pub u8);

/// Hardware trigger source a conversion sequence waits on.
///
/// The value is an opaque selector interpreted by the implementation
/// (e.g. a timer capture-compare line); the core never decodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerSource(pub u8);

/// Errors reported by an analog front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AfeError {
    /// Channel routing was rejected
    ChannelConfig,
    /// Trigger-source routing was rejected
    TriggerConfig,
    /// Arming the DMA-fed conversion sequence failed
    DmaStart,
    /// Stopping the conversion sequence failed
    DmaStop,
    /// Reconfiguration attempted while a conversion is in flight
    Busy,
}

/// Trait for a triggered, DMA-fed analog front-end.
///
/// The contract the acquisition core relies on:
///
/// - `configure_channel` and `select_trigger` are only called while the
///   instance is quiesced. An implementation may enforce this by
///   returning [`AfeError::Busy`] when a conversion is still running.
/// - `start_triggered_dma` arms one conversion per trigger pulse,
///   writing one sample per element of `destination`, and completes
///   asynchronously (the platform reports completion out of band).
/// - `stop_dma` is idempotent and returns the instance to a
///   configurable state.
pub trait AnalogFrontEnd {
    /// Identity of this instance, as reported in completion events
    fn id(&self) -> AfeInstanceId;

    /// Route the given input channel to the converter
    fn configure_channel(&mut self, channel: ChannelId) -> Result<(), AfeError>;

    /// Select the hardware trigger the conversion sequence waits on
    fn select_trigger(&mut self, source: TriggerSource) -> Result<(), AfeError>;

    /// Arm a triggered conversion sequence of `destination.len()` samples
    ///
    /// The buffer is filled by hardware between this call and the
    /// platform's completion notification.
    fn start_triggered_dma(&mut self, destination: &mut [u16]) -> Result<(), AfeError>;

    /// Halt the conversion sequence and quiesce the instance
    fn stop_dma(&mut self) -> Result<(), AfeError>;
}
