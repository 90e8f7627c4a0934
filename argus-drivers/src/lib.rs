//! Adapter implementations of the Argus HAL traits
//!
//! Binds the `argus-hal` trait seam to the ecosystem interfaces board
//! crates actually expose:
//!
//! - Start-pulse pins over `embedded-hal` 1.0 digital outputs
//! - Integration-time delay over `embedded-hal` `DelayNs`
//! - Report transmission over `embedded-io` blocking writers
//!
//! Chip-specific front-end and timer drivers live in per-board crates;
//! this crate only covers the interfaces with a portable standard.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod serial;

pub use delay::SystemDelay;
pub use gpio::StartPulsePin;
pub use serial::BlockingTx;
