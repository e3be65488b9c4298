//! Core types for the fitstat computation
//!
//! This module defines the data that flows through the stages: the workout
//! code tag, the computed summary record, and the JSON output envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ComputeError;

/// Three-letter workout tag carried by sensor packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkoutCode {
    Run,
    Wlk,
    Swm,
}

impl WorkoutCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
            WorkoutCode::Swm => "SWM",
        }
    }

    /// Human-readable activity name used in summary output
    pub fn activity_label(&self) -> &'static str {
        match self {
            WorkoutCode::Run => "Running",
            WorkoutCode::Wlk => "Walking",
            WorkoutCode::Swm => "Swimming",
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            "SWM" => Ok(WorkoutCode::Swm),
            other => Err(ComputeError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed statistics for one workout, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Activity name ("Running", "Walking", "Swimming")
    pub activity_label: String,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Covered distance (km)
    pub distance_km: f64,
    /// Mean speed over the whole duration (km/h)
    pub mean_speed_kmh: f64,
    /// Estimated energy expenditure (kcal)
    pub calories: f64,
}

/// Producer metadata embedded in JSON summary records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Structured output envelope (`fitstat.summary.v1`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub record_version: String,
    pub producer: SummaryProducer,
    /// Workout code the summary was computed from
    pub workout_type: WorkoutCode,
    pub computed_at_utc: String,
    pub summary: WorkoutSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [WorkoutCode::Run, WorkoutCode::Wlk, WorkoutCode::Swm] {
            assert_eq!(code.as_str().parse::<WorkoutCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = "JOG".parse::<WorkoutCode>().unwrap_err();
        assert!(matches!(err, ComputeError::UnknownWorkoutType(ref c) if c == "JOG"));
    }

    #[test]
    fn test_code_serde_uses_upper_case_tags() {
        let json = serde_json::to_string(&WorkoutCode::Swm).unwrap();
        assert_eq!(json, "\"SWM\"");
        let back: WorkoutCode = serde_json::from_str("\"RUN\"").unwrap();
        assert_eq!(back, WorkoutCode::Run);
    }

    #[test]
    fn test_activity_labels() {
        assert_eq!(WorkoutCode::Run.activity_label(), "Running");
        assert_eq!(WorkoutCode::Wlk.activity_label(), "Walking");
        assert_eq!(WorkoutCode::Swm.activity_label(), "Swimming");
    }
}
