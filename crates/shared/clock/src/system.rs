use std::time::Instant;

use chrono::Utc;
use pulse_core::Timestamp;
use pulse_ports::Clock;

/// Real monotonic clock for production use
///
/// The monotonic reading is anchored to an `Instant` captured at
/// construction, so readings count nanoseconds since the clock was
/// created. Only differences between readings are meaningful.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic_nanos(&self) -> i64 {
        // Saturates after ~292 years of process uptime
        self.origin.elapsed().as_nanos().min(i64::MAX as u128) as i64
    }

    fn wall_time(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
