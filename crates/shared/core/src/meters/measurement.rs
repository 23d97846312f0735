use serde::{Deserialize, Serialize};

/// Statistic described by a single measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    /// Number of recorded events
    Count,
    /// Sum of recorded amounts (unitless instruments)
    Total,
    /// Sum of recorded durations, in nanoseconds
    TotalTime,
    /// Instantaneous value
    Value,
    /// Largest recorded amount
    Max,
}

/// One named sample of an instrument's aggregate state
///
/// A meter reports its state as a set of measurements; the pairing of
/// statistic and value is what export collaborators consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub statistic: Statistic,
    pub value: f64,
}

impl Measurement {
    pub fn new(statistic: Statistic, value: f64) -> Self {
        Self { statistic, value }
    }
}
