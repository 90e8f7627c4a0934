//! Acquisition orchestration
//!
//! One controller owns the in-flight session, the sample buffer, the
//! front-end instances and the start-pulse pins. All sequencing rules
//! (reroute only while quiesced, one acquisition in flight, completion
//! matching) live here.

pub mod controller;
pub mod events;
pub mod session;

pub use controller::{AcquisitionController, FaultKind, InitError};
pub use events::AcquisitionEvent;
pub use session::AcquisitionSession;
