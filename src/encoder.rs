//! Structured summary encoding
//!
//! Encodes computed summaries into `fitstat.summary.v1` JSON records carrying
//! producer and provenance metadata, for consumers that want more than the
//! fixed text line.

use chrono::Utc;
use uuid::Uuid;

use crate::error::ComputeError;
use crate::types::{SummaryProducer, SummaryRecord, WorkoutCode, WorkoutSummary};
use crate::{FITSTAT_VERSION, PRODUCER_NAME};

/// Current output record version
pub const RECORD_VERSION: &str = "fitstat.summary.v1";

/// Encoder for structured summary records
pub struct SummaryEncoder {
    instance_id: String,
}

impl Default for SummaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap a computed summary in the output envelope
    pub fn encode(&self, code: WorkoutCode, summary: WorkoutSummary) -> SummaryRecord {
        SummaryRecord {
            record_version: RECORD_VERSION.to_string(),
            producer: SummaryProducer {
                name: PRODUCER_NAME.to_string(),
                version: FITSTAT_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            workout_type: code,
            computed_at_utc: Utc::now().to_rfc3339(),
            summary,
        }
    }

    /// Encode to a JSON string
    pub fn encode_to_json(
        &self,
        code: WorkoutCode,
        summary: WorkoutSummary,
    ) -> Result<String, ComputeError> {
        let record = self.encode(code, summary);
        serde_json::to_string_pretty(&record).map_err(ComputeError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> WorkoutSummary {
        WorkoutSummary {
            activity_label: "Running".to_string(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn test_encode_record() {
        let encoder = SummaryEncoder::with_instance_id("test-instance".to_string());
        let record = encoder.encode(WorkoutCode::Run, sample_summary());

        assert_eq!(record.record_version, RECORD_VERSION);
        assert_eq!(record.producer.name, PRODUCER_NAME);
        assert_eq!(record.producer.version, FITSTAT_VERSION);
        assert_eq!(record.producer.instance_id, "test-instance");
        assert_eq!(record.workout_type, WorkoutCode::Run);
        assert_eq!(record.summary.calories, 699.75);
    }

    #[test]
    fn test_encode_to_json() {
        let encoder = SummaryEncoder::new();
        let json = encoder
            .encode_to_json(WorkoutCode::Run, sample_summary())
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["record_version"], RECORD_VERSION);
        assert_eq!(parsed["workout_type"], "RUN");
        assert_eq!(parsed["summary"]["distance_km"], 9.75);
        assert!(parsed["computed_at_utc"].is_string());
    }
}
