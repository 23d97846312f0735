use serde::{Deserialize, Serialize};

/// Unique identifier for a meter
///
/// This provides a stable reference to an instrument that can be stored
/// by registries and used as map keys. Tag dimensions are intentionally
/// not part of the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeterId(pub String);

impl MeterId {
    /// Create a new meter ID
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MeterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MeterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MeterId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of instrument registered under a meter name
///
/// Registries use this to report which kind already holds a name when a
/// caller requests the same name with a different instrument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterKind {
    Counter,
    Timer,
    Gauge,
    DistributionSummary,
}

impl std::fmt::Display for MeterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MeterKind::Counter => "counter",
            MeterKind::Timer => "timer",
            MeterKind::Gauge => "gauge",
            MeterKind::DistributionSummary => "distribution summary",
        };
        write!(f, "{name}")
    }
}
