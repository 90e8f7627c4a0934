//! Board-agnostic acquisition logic for Argus linear image sensors
//!
//! This crate contains everything that does not depend on a specific
//! chip:
//!
//! - Sensor registry (which AFE channel, trigger and start pin belongs
//!   to which sensor head)
//! - The acquisition controller state machine
//! - Completion-event matching
//! - Report frame serialization
//! - Configuration type definitions
//!
//! Hardware access goes exclusively through the `argus-hal` traits.

#![no_std]
#![deny(unsafe_code)]

pub mod acquisition;
pub mod config;
pub mod registry;
pub mod report;
