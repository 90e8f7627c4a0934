//! Acquisition controller
//!
//! Owns the session, the sample buffer, the front-end instances and
//! the start-pulse pins, and sequences every acquisition:
//!
//! 1. Record the target sensor and its converter in the session,
//!    clearing readiness.
//! 2. Reroute the front-end's input channel and trigger source to the
//!    target sensor. Safe only because the completion handler always
//!    quiesces the front-end before flagging readiness.
//! 3. Arm the triggered, DMA-fed conversion sequence into the buffer.
//! 4. Pulse the start line, holding it high for the integration time
//!    (a blocking wait on the calling context).
//!
//! The foreground context must observe `is_data_ready()` before
//! starting the next acquisition; calling `start_acquisition` early is
//! a documented hazard, not a checked error. A front-end that rejects
//! rerouting while busy turns that hazard into a latched fault.

use heapless::Vec;

use argus_hal::afe::{AfeError, AnalogFrontEnd};
use argus_hal::{ClockGenerator, DelayMs, OutputPin, UartTx};

use crate::config::{AcquisitionConfig, MAX_FRONT_ENDS, MAX_SENSORS};
use crate::registry::{ConfigError, SensorRegistry};
use crate::report;

use super::events::AcquisitionEvent;
use super::session::AcquisitionSession;

/// Construction-time errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Registry or wiring validation failed
    Config(ConfigError),
    /// The shared pixel clock could not be started
    ClockStart,
}

impl From<ConfigError> for InitError {
    fn from(err: ConfigError) -> Self {
        InitError::Config(err)
    }
}

/// Latched hardware faults
///
/// Any of these is terminal: continuing with a half-configured
/// front-end risks corrupting unrelated sensors' data, so the
/// controller stops accepting work and waits for human intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Input-channel rerouting was rejected
    ChannelRouting(AfeError),
    /// Trigger-source rerouting was rejected
    TriggerRouting(AfeError),
    /// Arming the DMA-fed conversion failed
    DmaArm(AfeError),
    /// Quiescing the front-end after completion failed
    Quiesce(AfeError),
}

/// The acquisition state machine
///
/// `N` is the pixel count per sensor; `CAP` is the report staging
/// capacity, which should be at least [`staging_capacity(N)`] for
/// untruncated frames.
///
/// [`staging_capacity(N)`]: crate::config::staging_capacity
pub struct AcquisitionController<A, P, D, const N: usize, const CAP: usize> {
    registry: SensorRegistry,
    front_ends: Vec<A, MAX_FRONT_ENDS>,
    start_pins: Vec<P, MAX_SENSORS>,
    delay: D,
    config: AcquisitionConfig,
    session: AcquisitionSession,
    buffer: [u16; N],
    staging: [u8; CAP],
    fault: Option<FaultKind>,
}

impl<A, P, D, const N: usize, const CAP: usize> AcquisitionController<A, P, D, N, CAP>
where
    A: AnalogFrontEnd,
    P: OutputPin,
    D: DelayMs,
{
    /// Construct the controller and start the shared pixel clock
    ///
    /// Validates that every descriptor's converter and start pin
    /// resolve to hardware actually handed in. The clock is started
    /// exactly once and never stopped by this controller; a clock that
    /// fails to start is fatal.
    pub fn new<C>(
        clock: &mut C,
        registry: SensorRegistry,
        front_ends: Vec<A, MAX_FRONT_ENDS>,
        start_pins: Vec<P, MAX_SENSORS>,
        delay: D,
        config: AcquisitionConfig,
    ) -> Result<Self, InitError>
    where
        C: ClockGenerator,
    {
        for descriptor in registry.iter() {
            if !front_ends.iter().any(|f| f.id() == descriptor.converter) {
                return Err(ConfigError::UnknownConverter.into());
            }
            if descriptor.start_pin as usize >= start_pins.len() {
                return Err(ConfigError::UnknownStartPin.into());
            }
        }

        clock
            .start_periodic_output()
            .map_err(|_| InitError::ClockStart)?;

        Ok(Self {
            registry,
            front_ends,
            start_pins,
            delay,
            config,
            session: AcquisitionSession::new(),
            buffer: [0; N],
            staging: [0; CAP],
            fault: None,
        })
    }

    /// Start one acquisition cycle for the given sensor
    ///
    /// Fire-and-forget: progress is observed via [`is_data_ready`].
    /// An out-of-range index is a silent no-op that touches neither
    /// state nor hardware; callers needing strict validation should
    /// check against the registry themselves. Blocks the calling
    /// context for the configured integration time.
    ///
    /// Must not be called again until the previous acquisition's
    /// readiness has been observed (see module docs).
    ///
    /// [`is_data_ready`]: Self::is_data_ready
    pub fn start_acquisition(&mut self, index: u8) {
        if self.fault.is_some() {
            return;
        }
        let Ok(descriptor) = self.registry.lookup(index) else {
            return;
        };
        let descriptor = *descriptor;

        self.session.begin(index, descriptor.converter);

        // Wiring was validated in new(); a miss here cannot happen.
        let Some(afe) = self
            .front_ends
            .iter_mut()
            .find(|f| f.id() == descriptor.converter)
        else {
            return;
        };

        // Reroute the front-end for this sensor. The instance is
        // quiesced at this point (completion handler stopped it, or it
        // was never armed).
        if let Err(err) = afe.configure_channel(descriptor.channel) {
            self.fault = Some(FaultKind::ChannelRouting(err));
            return;
        }
        if let Err(err) = afe.select_trigger(descriptor.trigger) {
            self.fault = Some(FaultKind::TriggerRouting(err));
            return;
        }

        // Arm one conversion per pixel; hardware fills the buffer
        // between here and the completion event.
        if let Err(err) = afe.start_triggered_dma(&mut self.buffer) {
            self.fault = Some(FaultKind::DmaArm(err));
            return;
        }

        // Start pulse: the hold time is the sensor's integration time.
        let pin = &mut self.start_pins[descriptor.start_pin as usize];
        pin.set_high();
        self.delay.delay_ms(self.config.integration_time_ms);
        pin.set_low();
    }

    /// Whether the last started acquisition has completed
    ///
    /// Never blocks, never mutates state; safe to call from either
    /// execution context.
    pub fn is_data_ready(&self) -> bool {
        self.session.is_ready()
    }

    /// Deliver an asynchronous event into the controller
    ///
    /// Called from the platform's interrupt/callback context. Safe at
    /// any point after `start_acquisition` has begun; the platform
    /// guarantees it never runs concurrently with itself.
    pub fn handle_event(&mut self, event: AcquisitionEvent) {
        if self.fault.is_some() {
            return;
        }
        match event {
            AcquisitionEvent::ConversionCompleted { instance } => {
                // Completions from instances this session is not
                // tracking are legitimately possible (the front-end
                // may serve sensors outside this system) and ignored.
                if !self.session.matches(instance) {
                    return;
                }

                let Some(afe) = self.front_ends.iter_mut().find(|f| f.id() == instance)
                else {
                    return;
                };

                // Quiesce before flagging readiness: the next
                // start_acquisition relies on the instance being
                // reconfigurable.
                if let Err(err) = afe.stop_dma() {
                    self.fault = Some(FaultKind::Quiesce(err));
                    return;
                }

                self.session.complete();
            }
        }
    }

    /// Serialize and transmit the completed acquisition
    ///
    /// A no-op unless data is ready, so stale or zero-initialized
    /// samples are never transmitted. The frame is
    /// `BEGIN,SENSOR_<id>,<v0>,<v1>,...,END\r\n`; if the staging
    /// capacity cannot hold every sample the frame is truncated at a
    /// token boundary and still terminated.
    pub fn report<S>(&mut self, serial: &mut S) -> Result<(), S::Error>
    where
        S: UartTx,
    {
        if self.fault.is_some() || !self.session.is_ready() {
            return Ok(());
        }
        let Some(sensor) = self.session.active_sensor() else {
            return Ok(());
        };

        let len = report::encode_frame(sensor, &self.buffer, &mut self.staging);
        serial.write_blocking(&self.staging[..len])
    }

    /// The latched fault, if the controller has entered its terminal
    /// error state
    pub fn fault(&self) -> Option<FaultKind> {
        self.fault
    }

    /// Sensor index of the in-flight or last-completed acquisition
    pub fn active_sensor(&self) -> Option<u8> {
        self.session.active_sensor()
    }

    /// The completed sample buffer, or None while an acquisition is in
    /// flight or none has run
    pub fn samples(&self) -> Option<&[u16]> {
        if self.session.is_ready() {
            Some(&self.buffer[..])
        } else {
            None
        }
    }
}
