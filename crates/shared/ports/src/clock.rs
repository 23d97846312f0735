use pulse_core::Timestamp;

/// Port for time abstraction
///
/// This allows instruments to use different time sources:
/// - Real monotonic time for production
/// - An explicitly advanceable counter for deterministic tests
///
/// A registry shares one clock across all of its instruments; instruments
/// hold the clock by shared reference and never own it.
pub trait Clock: Send + Sync {
    /// Current monotonic reading in nanoseconds since an arbitrary epoch
    ///
    /// Non-decreasing across all reads and safe under concurrent callers.
    /// Only differences between two readings are meaningful.
    fn monotonic_nanos(&self) -> i64;

    /// Current wall-clock time, for event timestamps
    ///
    /// Never use this for measuring durations; wall time can jump.
    fn wall_time(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
