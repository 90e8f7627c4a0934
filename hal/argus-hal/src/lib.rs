//! Argus Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits consumed by
//! `argus-core`. Chip-specific crates (STM32 timers, ADC+DMA engines,
//! UARTs) implement these traits, which keeps the acquisition logic
//! board-agnostic and host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Acquisition logic (argus-core)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  argus-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ argus-drivers │       │  board crate  │
//! │ (eh adapters) │       │ (per variant) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - start-pulse lines
//! - [`uart::UartTx`] - report transmission
//! - [`delay::DelayMs`] - integration-time hold
//! - [`clock::ClockGenerator`] - shared pixel clock
//! - [`afe::AnalogFrontEnd`] - channel/trigger routing and triggered DMA

#![no_std]
#![deny(unsafe_code)]

pub mod afe;
pub mod clock;
pub mod delay;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use afe::{AfeError, AfeInstanceId, AnalogFrontEnd, ChannelId, TriggerSource};
pub use clock::ClockGenerator;
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use uart::UartTx;
