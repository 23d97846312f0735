//! Pulse Core Domain
//!
//! Pure domain types for the Pulse metrics library.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod meters;
pub mod units;
pub mod values;

// Re-export commonly used types at crate root
pub use meters::{Measurement, MeterId, MeterKind, Statistic};
pub use units::TimeUnit;
pub use values::Timestamp;
