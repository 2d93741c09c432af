use thiserror::Error;

/// Rejected scene configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { field: &'static str, value: f64 },
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("{what}: floor {floor} exceeds cap {cap}")]
    FloorAboveCap {
        what: &'static str,
        floor: usize,
        cap: usize,
    },
    #[error("{field}: min {min} exceeds max {max}")]
    InvertedRange { field: &'static str, min: f64, max: f64 },
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}
