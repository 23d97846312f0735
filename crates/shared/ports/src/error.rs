use pulse_core::MeterKind;
use thiserror::Error;

/// Errors raised by meter registration
///
/// Recording itself never fails: out-of-range amounts are discarded
/// silently and are not an error condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeterError {
    #[error("meter '{name}' is already registered as a {existing}, requested as a {requested}")]
    TypeConflict {
        name: String,
        existing: MeterKind,
        requested: MeterKind,
    },
}

pub type MeterResult<T> = std::result::Result<T, MeterError>;
