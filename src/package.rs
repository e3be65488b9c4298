//! Sensor package schema and workout dispatch
//!
//! A sensor package is the raw input record: a three-letter workout code plus
//! an ordered sequence of numeric sensor values. Values bind positionally to
//! the target variant's fields (base fields first, then variant extras); the
//! dispatcher validates the shape before any typed variant is constructed.

use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::types::WorkoutCode;
use crate::workouts::{Running, Swimming, Walking, Workout};

/// Current input schema version
pub const SCHEMA_VERSION: &str = "fitstat.sensor_package.v1";

/// Raw input record received from a tracker device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Schema version identifier, checked when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Three-letter workout tag ("RUN", "WLK", "SWM")
    pub workout_type: String,
    /// Positional sensor values in field declaration order
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        SensorPackage {
            schema_version: Some(SCHEMA_VERSION.to_string()),
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Resolve this package into a typed workout variant.
    ///
    /// Fails with [`ComputeError::UnknownWorkoutType`] for codes outside the
    /// fixed set, [`ComputeError::ArityMismatch`] for a wrong value count,
    /// and [`ComputeError::InvalidValue`] for values that violate the field
    /// invariants (non-finite numbers, fractional or negative counts,
    /// non-positive divisors).
    pub fn resolve(&self) -> Result<Workout, ComputeError> {
        if let Some(version) = &self.schema_version {
            if version != SCHEMA_VERSION {
                return Err(ComputeError::SchemaVersionMismatch {
                    expected: SCHEMA_VERSION,
                    actual: version.clone(),
                });
            }
        }

        let code: WorkoutCode = self.workout_type.parse()?;
        resolve(code, &self.data)
    }
}

/// Map a workout code and positional values to a calculator variant
pub fn resolve(code: WorkoutCode, data: &[f64]) -> Result<Workout, ComputeError> {
    check_arity(code, data)?;

    let action_count = count_field(data[0], "action_count")?;
    let duration_hours = divisor_field(data[1], "duration_hours")?;
    let weight_kg = measure_field(data[2], "weight_kg")?;

    match code {
        WorkoutCode::Run => Ok(Workout::Running(Running {
            action_count,
            duration_hours,
            weight_kg,
        })),
        WorkoutCode::Wlk => Ok(Workout::Walking(Walking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: divisor_field(data[3], "height_cm")?,
        })),
        WorkoutCode::Swm => Ok(Workout::Swimming(Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m: measure_field(data[3], "pool_length_m")?,
            pool_laps: count_field(data[4], "pool_laps")?,
        })),
    }
}

/// Expected positional value count per workout code
fn expected_arity(code: WorkoutCode) -> usize {
    match code {
        WorkoutCode::Run => 3,
        WorkoutCode::Wlk => 4,
        WorkoutCode::Swm => 5,
    }
}

fn check_arity(code: WorkoutCode, data: &[f64]) -> Result<(), ComputeError> {
    let expected = expected_arity(code);
    if data.len() != expected {
        return Err(ComputeError::ArityMismatch {
            code: code.as_str(),
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

/// A count position must hold a non-negative whole number
fn count_field(value: f64, field: &'static str) -> Result<u32, ComputeError> {
    if !value.is_finite() {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be non-negative",
        });
    }
    if value.fract() != 0.0 {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "exceeds the count range",
        });
    }
    Ok(value as u32)
}

/// A measurement position must hold a finite non-negative number
fn measure_field(value: f64, field: &'static str) -> Result<f64, ComputeError> {
    if !value.is_finite() {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

/// A divisor position (duration, height) must be finite and strictly positive
fn divisor_field(value: f64, field: &'static str) -> Result<f64, ComputeError> {
    if !value.is_finite() {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(ComputeError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Reader for batches of sensor packages in JSON form
pub struct PackageReader;

impl PackageReader {
    /// Parse a JSON array of packages
    pub fn parse_array(json: &str) -> Result<Vec<SensorPackage>, ComputeError> {
        let packages: Vec<SensorPackage> = serde_json::from_str(json)?;
        Ok(packages)
    }

    /// Parse newline-delimited JSON, one package per non-empty line
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<SensorPackage>, ComputeError> {
        let mut packages = Vec::new();
        for line in ndjson.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let package: SensorPackage = serde_json::from_str(trimmed)?;
            packages.push(package);
        }
        Ok(packages)
    }

    /// Validate a batch, returning one issue per failing package
    pub fn validate_packages(packages: &[SensorPackage]) -> Vec<PackageIssue> {
        packages
            .iter()
            .enumerate()
            .filter_map(|(index, package)| match package.resolve() {
                Ok(_) => None,
                Err(error) => Some(PackageIssue {
                    index,
                    workout_type: package.workout_type.clone(),
                    error,
                }),
            })
            .collect()
    }
}

/// A package that failed shape validation
#[derive(Debug)]
pub struct PackageIssue {
    pub index: usize,
    pub workout_type: String,
    pub error: ComputeError,
}
