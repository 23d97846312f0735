use std::sync::atomic::{AtomicU64, Ordering};

use pulse_core::{Measurement, MeterId, Statistic};
use pulse_ports::Meter;

/// Counter instrument: a monotonically increasing accumulated amount
///
/// The value lives in a single atomic cell holding `f64` bits, updated
/// by a compare-exchange loop, so concurrent increments are never lost
/// and readers always see a fully applied value.
pub struct Counter {
    id: MeterId,
    bits: AtomicU64,
}

impl Counter {
    pub fn new(id: impl Into<MeterId>) -> Self {
        Self {
            id: id.into(),
            bits: AtomicU64::new(0.0f64.to_bits()),
        }
    }

    /// Add an amount to the counter
    ///
    /// Counters are monotonic: negative and non-finite amounts are
    /// discarded without touching the value.
    pub fn add(&self, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }

        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + amount).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    /// Add one to the counter
    pub fn increment(&self) {
        self.add(1.0);
    }

    /// Accumulated amount
    pub fn count(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Meter for Counter {
    fn id(&self) -> &MeterId {
        &self.id
    }

    fn measure(&self) -> Vec<Measurement> {
        vec![Measurement::new(Statistic::Count, self.count())]
    }
}
