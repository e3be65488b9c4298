//! Error types for fitstat

use thiserror::Error;

/// Errors that can occur while resolving or computing a workout
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Wrong number of sensor values for {code}: expected {expected}, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid schema version: expected {expected}, got {actual}")]
    SchemaVersionMismatch {
        expected: &'static str,
        actual: String,
    },

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
