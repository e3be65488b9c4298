//! Pipeline orchestration
//!
//! This module provides the public API for fitstat: resolve a sensor package
//! to its workout variant, run the variant's formulas, and hand back the
//! summary (or its rendered message).

use crate::error::ComputeError;
use crate::package::{self, SensorPackage};
use crate::report::summary_message;
use crate::types::{WorkoutCode, WorkoutSummary};

/// Compute the summary for one sensor package.
///
/// # Arguments
/// * `workout_type` - Three-letter workout code ("RUN", "WLK", "SWM")
/// * `data` - Positional sensor values for the resolved variant
///
/// # Example
/// ```
/// let summary = fitstat::package_to_summary("RUN", &[15000.0, 1.0, 75.0])?;
/// assert!((summary.distance_km - 9.75).abs() < 1e-9);
/// # Ok::<(), fitstat::ComputeError>(())
/// ```
pub fn package_to_summary(
    workout_type: &str,
    data: &[f64],
) -> Result<WorkoutSummary, ComputeError> {
    let code: WorkoutCode = workout_type.parse()?;
    let workout = package::resolve(code, data)?;
    Ok(workout.summary())
}

/// Compute and render the one-line summary message for one sensor package
pub fn package_to_message(workout_type: &str, data: &[f64]) -> Result<String, ComputeError> {
    let summary = package_to_summary(workout_type, data)?;
    Ok(summary_message(&summary))
}

/// Process a batch of packages.
///
/// Packages are independent: a failing record yields its own `Err` entry and
/// does not abort the rest of the batch.
pub fn process_packages(packages: &[SensorPackage]) -> Vec<Result<WorkoutSummary, ComputeError>> {
    packages
        .iter()
        .map(|package| package.resolve().map(|workout| workout.summary()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_swimming_package() {
        let message = package_to_message("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            message,
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_running_package() {
        let message = package_to_message("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(
            message,
            "Тип тренировки: Running; Длительность: 1.000 ч.; \
             Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
             Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_walking_package() {
        let message = package_to_message("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            message,
            "Тип тренировки: Walking; Длительность: 1.000 ч.; \
             Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; \
             Потрачено ккал: 157.500."
        );
    }

    #[test]
    fn test_unknown_code_fails_loud() {
        let err = package_to_summary("ROW", &[100.0, 1.0, 70.0]).unwrap_err();
        assert!(matches!(err, ComputeError::UnknownWorkoutType(ref c) if c == "ROW"));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let packages = vec![
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("XXX", vec![1.0, 2.0, 3.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];

        let results = process_packages(&packages);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        let walking = results[2].as_ref().unwrap();
        assert_eq!(walking.activity_label, "Walking");
        assert!((walking.distance_km - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let first = package_to_summary("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let second = package_to_summary("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(first, second);
    }
}
