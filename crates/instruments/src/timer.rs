use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use pulse_core::{Measurement, MeterId, Statistic, TimeUnit};
use pulse_ports::{Clock, Meter};

/// Timer instrument: elapsed-time samples for discrete operations
///
/// Aggregates how many times an operation happened and how long it took
/// in total. Durations can be recorded directly, from a `Duration`, or by
/// timing a unit of work against the shared clock.
///
/// Recording policy:
/// - negative (or non-finite) amounts are discarded entirely
/// - zero amounts count the event but add nothing to the total
/// - positive amounts count the event and add to the total
pub struct Timer {
    id: MeterId,
    clock: Arc<dyn Clock>,
    state: Mutex<TimerState>,
}

impl std::fmt::Debug for Timer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timer")
            .field("id", &self.id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Combined aggregate state
///
/// Count and total live under one lock so a recording is applied as one
/// step: no observer can see the count of a call without its time, or
/// the time without its count.
#[derive(Debug, Clone, Copy, Default)]
struct TimerState {
    count: u64,
    total_nanos: f64,
    max_nanos: f64,
}

impl Timer {
    /// Create a timer reading from the given shared clock
    ///
    /// # Arguments
    /// * `id` - Name the registry bound this timer to
    /// * `clock` - Shared time source owned by the registry
    pub fn new(id: impl Into<MeterId>, clock: Arc<dyn Clock>) -> Self {
        Self {
            id: id.into(),
            clock,
            state: Mutex::new(TimerState::default()),
        }
    }

    /// Record a duration expressed in the given unit
    ///
    /// Negative and non-finite amounts are discarded without touching the
    /// aggregates: a negative duration means clock skew or a caller bug,
    /// and counting it would corrupt every downstream consumer.
    pub fn record(&self, amount: f64, unit: TimeUnit) {
        let nanos = unit.to_nanos(amount);
        if !nanos.is_finite() || nanos < 0.0 {
            return;
        }

        let mut state = self.lock_state();
        state.count += 1;
        if nanos > 0.0 {
            state.total_nanos += nanos;
            if nanos > state.max_nanos {
                state.max_nanos = nanos;
            }
        }
    }

    /// Record an elapsed `Duration`
    pub fn record_duration(&self, duration: Duration) {
        self.record(duration.as_nanos() as f64, TimeUnit::Nanoseconds);
    }

    /// Time a unit of work and record its elapsed time
    ///
    /// The end reading is taken and the elapsed time recorded on every
    /// exit path: if `task` panics, the recording still happens before
    /// the panic continues unwinding to the caller. On success the task's
    /// return value is passed through.
    pub fn record_fn<T>(&self, task: impl FnOnce() -> T) -> T {
        let _sample = Sample {
            timer: self,
            start: self.clock.monotonic_nanos(),
        };
        task()
    }

    /// Time a fallible unit of work and record its elapsed time
    ///
    /// The elapsed time is recorded whether the task returns `Ok` or
    /// `Err`; the result is then returned to the caller unchanged.
    pub fn record_callable<T, E>(&self, task: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.record_fn(task)
    }

    /// Number of recorded events
    pub fn count(&self) -> u64 {
        self.lock_state().count
    }

    /// Total recorded time, converted to the given unit
    pub fn total_time(&self, unit: TimeUnit) -> f64 {
        unit.from_nanos(self.lock_state().total_nanos)
    }

    /// Mean recorded time, converted to the given unit
    ///
    /// Zero when nothing has been recorded yet.
    pub fn mean(&self, unit: TimeUnit) -> f64 {
        let state = self.lock_state();
        if state.count == 0 {
            return 0.0;
        }
        unit.from_nanos(state.total_nanos / state.count as f64)
    }

    /// Largest single recorded time, converted to the given unit
    pub fn max(&self, unit: TimeUnit) -> f64 {
        unit.from_nanos(self.lock_state().max_nanos)
    }

    fn lock_state(&self) -> MutexGuard<'_, TimerState> {
        // The critical section is pure arithmetic; a poisoned lock still
        // holds usable aggregates.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Meter for Timer {
    fn id(&self) -> &MeterId {
        &self.id
    }

    fn measure(&self) -> Vec<Measurement> {
        let state = *self.lock_state();
        vec![
            Measurement::new(Statistic::Count, state.count as f64),
            Measurement::new(Statistic::TotalTime, state.total_nanos),
            Measurement::new(Statistic::Max, state.max_nanos),
        ]
    }
}

/// Guard that records the elapsed time of an in-flight task when dropped
///
/// Dropping is the guaranteed-release action: it runs on normal return
/// and during unwinding alike, so the recording always precedes whatever
/// the caller observes.
struct Sample<'a> {
    timer: &'a Timer,
    start: i64,
}

impl Drop for Sample<'_> {
    fn drop(&mut self) {
        let end = self.timer.clock.monotonic_nanos();
        self.timer
            .record((end - self.start) as f64, TimeUnit::Nanoseconds);
    }
}
