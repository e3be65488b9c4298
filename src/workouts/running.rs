//! Running workout calculator

use super::{WorkoutCalculator, MINUTES_IN_HOUR, M_IN_KM};
use crate::types::WorkoutCode;

/// Stride length of a running step, in meters
const STEP_LENGTH: f64 = 0.65;

/// Speed multiplier in the running calorie formula
const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;

/// Speed shift in the running calorie formula
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Running workout measured by a step counter
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl WorkoutCalculator for Running {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Run
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_length(&self) -> f64 {
        STEP_LENGTH
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MINUTES_IN_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_run() -> Running {
        Running {
            action_count: 15000,
            duration_hours: 1.0,
            weight_kg: 75.0,
        }
    }

    #[test]
    fn test_distance() {
        // 15000 * 0.65 / 1000 = 9.75
        assert!((reference_run().distance_km() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed() {
        assert!((reference_run().mean_speed_kmh() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories() {
        // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60 = 699.75
        assert!((reference_run().spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_calories_scale_with_duration() {
        let mut run = reference_run();
        run.action_count = 30000;
        run.duration_hours = 2.0;
        // Same speed, twice the duration, twice the calories
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
        assert!((run.spent_calories() - 2.0 * 699.75).abs() < 1e-9);
    }
}
