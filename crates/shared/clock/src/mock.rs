use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration};
use pulse_core::{TimeUnit, Timestamp};
use pulse_ports::Clock;

/// Explicitly advanceable clock for deterministic tests
///
/// Starts at zero and moves only when the test driver advances it, so a
/// timed operation observes exactly the elapsed time the test injected.
/// Reads are atomic and safe under concurrent recording calls; advances
/// are expected to be serialized by the test driver.
pub struct MockClock {
    nanos: AtomicI64,
}

impl MockClock {
    /// Create a new mock clock at nanosecond zero
    ///
    /// Returned pre-wrapped in `Arc` since the whole point is sharing one
    /// clock between the test driver and the instruments under test.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            nanos: AtomicI64::new(0),
        })
    }

    /// Advance the clock and return the new reading in nanoseconds
    pub fn advance(&self, amount: i64, unit: TimeUnit) -> i64 {
        self.advance_nanos(amount * unit.nanos_per_unit())
    }

    /// Advance the clock by raw nanoseconds and return the new reading
    pub fn advance_nanos(&self, nanos: i64) -> i64 {
        self.nanos.fetch_add(nanos, Ordering::Relaxed) + nanos
    }
}

impl Clock for MockClock {
    fn monotonic_nanos(&self) -> i64 {
        self.nanos.load(Ordering::Relaxed)
    }

    fn wall_time(&self) -> Timestamp {
        DateTime::UNIX_EPOCH + Duration::nanoseconds(self.monotonic_nanos())
    }

    fn name(&self) -> &str {
        "MockClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = MockClock::new();
        assert_eq!(clock.monotonic_nanos(), 0);
    }

    #[test]
    fn test_advance_converts_units() {
        let clock = MockClock::new();
        assert_eq!(clock.advance(42, TimeUnit::Milliseconds), 42_000_000);
        assert_eq!(clock.advance(1, TimeUnit::Seconds), 1_042_000_000);
        assert_eq!(clock.monotonic_nanos(), 1_042_000_000);
    }

    #[test]
    fn test_advance_nanos_accumulates() {
        let clock = MockClock::new();
        clock.advance_nanos(10);
        clock.advance_nanos(5);
        assert_eq!(clock.monotonic_nanos(), 15);
    }

    #[test]
    fn test_wall_time_follows_counter() {
        let clock = MockClock::new();
        clock.advance(3, TimeUnit::Seconds);
        let expected = DateTime::UNIX_EPOCH + Duration::seconds(3);
        assert_eq!(clock.wall_time(), expected);
    }
}
