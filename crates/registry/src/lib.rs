//! Pulse Registry
//!
//! Creates and looks up instruments by name, binding them all to one
//! shared clock. Looking a name up twice yields the same instance;
//! requesting a name under a different instrument kind is a conflict.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::debug;
use pulse_clock::SystemClock;
use pulse_core::MeterKind;
use pulse_instruments::{Counter, DistributionSummary, Gauge, Timer};
use pulse_ports::{Clock, Meter, MeterError, MeterResult};

/// In-memory meter registry
///
/// The registry owns the clock; instruments borrow it by shared
/// reference. Get-or-create is safe under concurrent callers racing on
/// the same name: exactly one instance wins and everyone receives it.
pub struct SimpleRegistry {
    clock: Arc<dyn Clock>,
    meters: DashMap<String, RegisteredMeter>,
}

#[derive(Clone)]
enum RegisteredMeter {
    Counter(Arc<Counter>),
    Timer(Arc<Timer>),
    Gauge(Arc<Gauge>),
    Summary(Arc<DistributionSummary>),
}

impl RegisteredMeter {
    fn kind(&self) -> MeterKind {
        match self {
            RegisteredMeter::Counter(_) => MeterKind::Counter,
            RegisteredMeter::Timer(_) => MeterKind::Timer,
            RegisteredMeter::Gauge(_) => MeterKind::Gauge,
            RegisteredMeter::Summary(_) => MeterKind::DistributionSummary,
        }
    }

    fn as_meter(&self) -> Arc<dyn Meter> {
        match self {
            RegisteredMeter::Counter(counter) => counter.clone(),
            RegisteredMeter::Timer(timer) => timer.clone(),
            RegisteredMeter::Gauge(gauge) => gauge.clone(),
            RegisteredMeter::Summary(summary) => summary.clone(),
        }
    }
}

impl SimpleRegistry {
    /// Create a registry backed by a fresh system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Create a registry reading from an injected clock
    ///
    /// This is how deterministic tests take control of time: inject a
    /// `MockClock` and advance it explicitly.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            meters: DashMap::new(),
        }
    }

    /// The clock shared by every instrument of this registry
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Get or create the timer registered under `name`
    pub fn timer(&self, name: &str) -> MeterResult<Arc<Timer>> {
        match self.meters.entry(name.to_string()) {
            Entry::Occupied(entry) => match entry.get() {
                RegisteredMeter::Timer(timer) => Ok(timer.clone()),
                other => Err(self.conflict(name, other, MeterKind::Timer)),
            },
            Entry::Vacant(entry) => {
                let timer = Arc::new(Timer::new(name, self.clock.clone()));
                entry.insert(RegisteredMeter::Timer(timer.clone()));
                debug!("registered timer '{name}'");
                Ok(timer)
            }
        }
    }

    /// Get or create the counter registered under `name`
    pub fn counter(&self, name: &str) -> MeterResult<Arc<Counter>> {
        match self.meters.entry(name.to_string()) {
            Entry::Occupied(entry) => match entry.get() {
                RegisteredMeter::Counter(counter) => Ok(counter.clone()),
                other => Err(self.conflict(name, other, MeterKind::Counter)),
            },
            Entry::Vacant(entry) => {
                let counter = Arc::new(Counter::new(name));
                entry.insert(RegisteredMeter::Counter(counter.clone()));
                debug!("registered counter '{name}'");
                Ok(counter)
            }
        }
    }

    /// Get or create the distribution summary registered under `name`
    pub fn summary(&self, name: &str) -> MeterResult<Arc<DistributionSummary>> {
        match self.meters.entry(name.to_string()) {
            Entry::Occupied(entry) => match entry.get() {
                RegisteredMeter::Summary(summary) => Ok(summary.clone()),
                other => Err(self.conflict(name, other, MeterKind::DistributionSummary)),
            },
            Entry::Vacant(entry) => {
                let summary = Arc::new(DistributionSummary::new(name));
                entry.insert(RegisteredMeter::Summary(summary.clone()));
                debug!("registered distribution summary '{name}'");
                Ok(summary)
            }
        }
    }

    /// Register a gauge under `name`, or return the existing one
    ///
    /// The callback of an already registered gauge is kept; a later
    /// registration under the same name does not replace it.
    pub fn gauge(
        &self,
        name: &str,
        read: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> MeterResult<Arc<Gauge>> {
        match self.meters.entry(name.to_string()) {
            Entry::Occupied(entry) => match entry.get() {
                RegisteredMeter::Gauge(gauge) => Ok(gauge.clone()),
                other => Err(self.conflict(name, other, MeterKind::Gauge)),
            },
            Entry::Vacant(entry) => {
                let gauge = Arc::new(Gauge::new(name, read));
                entry.insert(RegisteredMeter::Gauge(gauge.clone()));
                debug!("registered gauge '{name}'");
                Ok(gauge)
            }
        }
    }

    /// Heterogeneous view of every registered instrument
    ///
    /// Export collaborators iterate this to serialize measurement
    /// snapshots; ordering is unspecified.
    pub fn meters(&self) -> Vec<Arc<dyn Meter>> {
        self.meters.iter().map(|e| e.value().as_meter()).collect()
    }

    /// Number of registered instruments
    pub fn len(&self) -> usize {
        self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }

    fn conflict(&self, name: &str, existing: &RegisteredMeter, requested: MeterKind) -> MeterError {
        MeterError::TypeConflict {
            name: name.to_string(),
            existing: existing.kind(),
            requested,
        }
    }
}

impl Default for SimpleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
