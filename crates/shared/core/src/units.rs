use serde::{Deserialize, Serialize};

/// Time units supported for recording and reading timer values
///
/// Every unit has an exact integer nanosecond factor, so conversions of
/// integer amounts at these scales are exact in `f64` (all factors are
/// below 2^53).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Nanoseconds in one unit of this kind
    pub const fn nanos_per_unit(&self) -> i64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60_000_000_000,
            TimeUnit::Hours => 3_600_000_000_000,
            TimeUnit::Days => 86_400_000_000_000,
        }
    }

    /// Convert an amount of this unit to nanoseconds
    pub fn to_nanos(&self, amount: f64) -> f64 {
        amount * self.nanos_per_unit() as f64
    }

    /// Convert a nanosecond amount to this unit
    pub fn from_nanos(&self, nanos: f64) -> f64 {
        nanos / self.nanos_per_unit() as f64
    }

    /// Convert an amount between two units
    pub fn convert(amount: f64, from: TimeUnit, to: TimeUnit) -> f64 {
        if from == to {
            return amount;
        }
        to.from_nanos(from.to_nanos(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_UNITS: [TimeUnit; 7] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    fn assert_close(actual: f64, expected: f64) {
        if expected == 0.0 {
            assert_eq!(actual, 0.0);
        } else {
            let relative = ((actual - expected) / expected).abs();
            assert!(
                relative <= 1e-12,
                "expected {expected}, got {actual} (relative error {relative})"
            );
        }
    }

    #[test]
    fn test_integer_conversions_are_exact() {
        assert_eq!(TimeUnit::Milliseconds.to_nanos(42.0), 42_000_000.0);
        assert_eq!(TimeUnit::Seconds.to_nanos(1.0), 1e9);
        assert_eq!(TimeUnit::Days.to_nanos(1.0), 86_400_000_000_000.0);
        assert_eq!(TimeUnit::Milliseconds.from_nanos(42_000_000.0), 42.0);
        assert_eq!(TimeUnit::Minutes.from_nanos(120_000_000_000.0), 2.0);
    }

    #[test]
    fn test_convert_between_units() {
        assert_eq!(
            TimeUnit::convert(1.5, TimeUnit::Minutes, TimeUnit::Seconds),
            90.0
        );
        assert_eq!(
            TimeUnit::convert(24.0, TimeUnit::Hours, TimeUnit::Days),
            1.0
        );
        assert_close(
            TimeUnit::convert(1.0, TimeUnit::Nanoseconds, TimeUnit::Days),
            1.0 / 86_400_000_000_000.0,
        );
    }

    #[test]
    fn test_same_unit_is_identity() {
        for unit in ALL_UNITS {
            assert_eq!(TimeUnit::convert(123.456, unit, unit), 123.456);
        }
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for from in ALL_UNITS {
            for to in ALL_UNITS {
                let there = TimeUnit::convert(7.25, from, to);
                let back = TimeUnit::convert(there, to, from);
                assert_close(back, 7.25);
            }
        }
    }
}
