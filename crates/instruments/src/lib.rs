//! Pulse Instruments
//!
//! Metric instrument implementations for the Pulse metrics library.
//! Every instrument is a passive data structure: recording is a single
//! non-blocking aggregate update on the caller's thread, and concurrent
//! recordings are never lost.

mod counter;
mod gauge;
mod summary;
mod timer;

pub use counter::Counter;
pub use gauge::Gauge;
pub use summary::DistributionSummary;
pub use timer::Timer;

// Re-export the capability trait from ports for convenience
pub use pulse_ports::Meter;
