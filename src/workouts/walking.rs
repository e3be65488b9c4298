//! Sports walking workout calculator

use super::{WorkoutCalculator, MINUTES_IN_HOUR};
use crate::types::WorkoutCode;

/// Stride length of a walking step, in meters
const STEP_LENGTH: f64 = 0.65;

/// Weight multiplier in the walking calorie formula
const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Speed-over-height multiplier in the walking calorie formula
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout measured by a step counter plus the walker's height
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl WorkoutCalculator for Walking {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Wlk
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
        // The squared-speed-over-height term uses floor division, not true
        // division.
        let speed_height_term = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();
        (CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + speed_height_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * self.duration_hours
            * MINUTES_IN_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_walk() -> Walking {
        Walking {
            action_count: 9000,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        }
    }

    #[test]
    fn test_distance() {
        // 9000 * 0.65 / 1000 = 5.85
        assert!((reference_walk().distance_km() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed() {
        assert!((reference_walk().mean_speed_kmh() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories_floor_term_zero() {
        // speed^2 / height = 34.2225 / 180 floors to 0, leaving only the
        // weight term: 0.035 * 75 * 60 = 157.5
        assert!((reference_walk().spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories_floor_term_nonzero() {
        // 24000 steps in an hour: speed 15.6, speed^2 / 180 = 1.352 floors
        // to 1, so (0.035 * 75 + 1 * 0.029 * 75) * 60 = 288.0
        let walk = Walking {
            action_count: 24000,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        assert!((walk.spent_calories() - 288.0).abs() < 1e-9);
    }

    #[test]
    fn test_floor_not_true_division() {
        let walk = Walking {
            action_count: 24000,
            duration_hours: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        let true_division = (0.035 * 75.0 + (15.6_f64.powi(2) / 180.0) * 0.029 * 75.0) * 60.0;
        assert!((walk.spent_calories() - true_division).abs() > 1.0);
    }
}
