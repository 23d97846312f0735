use std::sync::{Mutex, MutexGuard};

use pulse_core::{Measurement, MeterId, Statistic};
use pulse_ports::Meter;

/// Distribution summary: the Timer's unitless sibling
///
/// Aggregates arbitrary sample amounts (payload sizes, batch lengths)
/// with the same recording policy as the timer: negative and non-finite
/// amounts are discarded, zero counts the event without adding.
pub struct DistributionSummary {
    id: MeterId,
    state: Mutex<SummaryState>,
}

#[derive(Debug, Clone, Copy, Default)]
struct SummaryState {
    count: u64,
    total: f64,
    max: f64,
}

impl DistributionSummary {
    pub fn new(id: impl Into<MeterId>) -> Self {
        Self {
            id: id.into(),
            state: Mutex::new(SummaryState::default()),
        }
    }

    /// Record a sample amount
    pub fn record(&self, amount: f64) {
        if !amount.is_finite() || amount < 0.0 {
            return;
        }

        let mut state = self.lock_state();
        state.count += 1;
        if amount > 0.0 {
            state.total += amount;
            if amount > state.max {
                state.max = amount;
            }
        }
    }

    /// Number of recorded samples
    pub fn count(&self) -> u64 {
        self.lock_state().count
    }

    /// Sum of recorded amounts
    pub fn total_amount(&self) -> f64 {
        self.lock_state().total
    }

    /// Mean recorded amount, zero before any sample
    pub fn mean(&self) -> f64 {
        let state = self.lock_state();
        if state.count == 0 {
            return 0.0;
        }
        state.total / state.count as f64
    }

    /// Largest single recorded amount
    pub fn max(&self) -> f64 {
        self.lock_state().max
    }

    fn lock_state(&self) -> MutexGuard<'_, SummaryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Meter for DistributionSummary {
    fn id(&self) -> &MeterId {
        &self.id
    }

    fn measure(&self) -> Vec<Measurement> {
        let state = *self.lock_state();
        vec![
            Measurement::new(Statistic::Count, state.count as f64),
            Measurement::new(Statistic::Total, state.total),
            Measurement::new(Statistic::Max, state.max),
        ]
    }
}
