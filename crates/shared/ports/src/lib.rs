//! Pulse Ports
//!
//! Port definitions (traits) for the Pulse metrics library.
//! These define the boundaries between instruments and the time source /
//! registry infrastructure around them.

mod clock;
mod error;
mod meter;

pub use clock::Clock;
pub use error::{MeterError, MeterResult};
pub use meter::Meter;
