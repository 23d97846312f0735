use pulse_core::{Measurement, MeterId, Statistic};
use pulse_ports::Meter;

/// Gauge instrument: an instantaneous value read on demand
///
/// A gauge holds no aggregate state of its own; every read invokes the
/// callback it was registered with (queue depth, pool size, and so on).
pub struct Gauge {
    id: MeterId,
    read: Box<dyn Fn() -> f64 + Send + Sync>,
}

impl Gauge {
    pub fn new(id: impl Into<MeterId>, read: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        Self {
            id: id.into(),
            read: Box::new(read),
        }
    }

    /// Current value as reported by the callback
    pub fn value(&self) -> f64 {
        (self.read)()
    }
}

impl Meter for Gauge {
    fn id(&self) -> &MeterId {
        &self.id
    }

    fn measure(&self) -> Vec<Measurement> {
        vec![Measurement::new(Statistic::Value, self.value())]
    }
}
