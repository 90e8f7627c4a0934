//! Sensor registry
//!
//! An immutable-after-build, validated lookup table mapping a sensor
//! index to its hardware identity. The index is the only handle the
//! rest of the system uses to name a sensor.

use heapless::Vec;

use argus_hal::afe::{AfeInstanceId, ChannelId, TriggerSource};

use crate::config::MAX_SENSORS;

/// Configuration and lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Registry built from an empty descriptor list
    EmptyRegistry,
    /// More descriptors than the platform supports
    TooManySensors,
    /// Lookup index outside the registry
    InvalidSensorIndex,
    /// Descriptor names a front-end instance not handed to the controller
    UnknownConverter,
    /// Descriptor names a start-pulse pin not handed to the controller
    UnknownStartPin,
}

/// Per-sensor hardware identity
///
/// Immutable once the registry is built. Several sensors may share one
/// front-end instance on different channels, or use distinct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorDescriptor {
    /// Analog front-end instance this sensor's output feeds
    pub converter: AfeInstanceId,
    /// Input channel on that front-end
    pub channel: ChannelId,
    /// Timer-derived trigger the conversion sequence waits on
    pub trigger: TriggerSource,
    /// Index of this sensor's start-pulse line in the controller's pin set
    pub start_pin: u8,
}

/// Validated, read-only sensor lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorRegistry {
    sensors: Vec<SensorDescriptor, MAX_SENSORS>,
}

impl SensorRegistry {
    /// Build a registry from an ordered descriptor list
    ///
    /// Fails if the list is empty or exceeds [`MAX_SENSORS`].
    pub fn build(descriptors: &[SensorDescriptor]) -> Result<Self, ConfigError> {
        if descriptors.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        let mut sensors = Vec::new();
        sensors
            .extend_from_slice(descriptors)
            .map_err(|_| ConfigError::TooManySensors)?;

        Ok(Self { sensors })
    }

    /// Look up a sensor by index
    pub fn lookup(&self, index: u8) -> Result<&SensorDescriptor, ConfigError> {
        self.sensors
            .get(index as usize)
            .ok_or(ConfigError::InvalidSensorIndex)
    }

    /// Number of sensors in the registry
    pub fn count(&self) -> usize {
        self.sensors.len()
    }

    /// Iterate over all descriptors in index order
    pub fn iter(&self) -> impl Iterator<Item = &SensorDescriptor> {
        self.sensors.iter()
    }
}
