use chrono::{DateTime, Utc};

/// Wall-clock timestamp in UTC
///
/// Used for event timestamps only; durations are always measured against
/// a monotonic nanosecond reading, never against wall time.
pub type Timestamp = DateTime<Utc>;
