//! In-flight acquisition session
//!
//! Exactly one session exists for the life of the controller. It
//! describes the in-flight or most-recently-completed acquisition;
//! there is no queuing and no reentrancy.

use argus_hal::afe::AfeInstanceId;

/// The single acquisition session record
///
/// The converter identity is captured here at start time because the
/// completion event has no other way to know which logical acquisition
/// is finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquisitionSession {
    active_sensor: Option<u8>,
    active_converter: Option<AfeInstanceId>,
    ready: bool,
}

impl Default for AcquisitionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AcquisitionSession {
    /// Create an idle session: no active sensor, data not ready
    pub fn new() -> Self {
        Self {
            active_sensor: None,
            active_converter: None,
            ready: false,
        }
    }

    /// Record a new acquisition, clearing readiness
    ///
    /// Overwrites whatever the previous acquisition left behind.
    pub fn begin(&mut self, sensor: u8, converter: AfeInstanceId) {
        self.active_sensor = Some(sensor);
        self.active_converter = Some(converter);
        self.ready = false;
    }

    /// Mark the in-flight acquisition complete
    ///
    /// The only transition the interrupt context performs.
    pub fn complete(&mut self) {
        self.ready = true;
    }

    /// Whether the completed sample buffer may be read
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Sensor index of the in-flight or last-completed acquisition
    pub fn active_sensor(&self) -> Option<u8> {
        self.active_sensor
    }

    /// Check whether a completion from `instance` belongs to this session
    ///
    /// False when no acquisition has ever started or when the event is
    /// from an unrelated front-end instance.
    pub fn matches(&self, instance: AfeInstanceId) -> bool {
        self.active_converter == Some(instance)
    }
}
