use pulse_core::{Measurement, MeterId};

/// Capability set shared by every metric instrument
///
/// Timers, counters, gauges and distribution summaries all expose a name
/// and a snapshot of their aggregate state. Registries hold heterogeneous
/// instruments through this trait; export collaborators iterate it.
pub trait Meter: Send + Sync {
    /// Identifier this instrument was registered under
    fn id(&self) -> &MeterId;

    /// Snapshot of the instrument's aggregate state
    ///
    /// Statistics that are updated together (e.g. a timer's count and
    /// total time) must be read together, so one snapshot never shows a
    /// half-applied recording.
    fn measure(&self) -> Vec<Measurement>;
}
