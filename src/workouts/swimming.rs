//! Swimming workout calculator

use super::{WorkoutCalculator, M_IN_KM};
use crate::types::WorkoutCode;

/// Stroke length, in meters
const STEP_LENGTH: f64 = 1.38;

/// Speed shift in the swimming calorie formula
const CALORIES_SPEED_SHIFT: f64 = 1.1;

/// Weight multiplier in the swimming calorie formula
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming workout measured by a stroke counter plus pool geometry.
///
/// Mean speed comes from the pool length and lap count rather than from the
/// stroke-derived distance; distance itself still uses the stroke length.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl WorkoutCalculator for Swimming {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Swm
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

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_swim() -> Swimming {
        Swimming {
            action_count: 720,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        }
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        // 720 * 1.38 / 1000 = 0.9936
        assert!((reference_swim().distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_uses_pool_geometry() {
        // 25 * 40 / 1000 / 1 = 1.0, not distance / duration
        assert!((reference_swim().mean_speed_kmh() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_spent_calories() {
        // (1.0 + 1.1) * 2 * 80 = 336.0
        assert!((reference_swim().spent_calories() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_override_independent_of_strokes() {
        let mut swim = reference_swim();
        swim.action_count = 1440;
        // Doubling strokes doubles distance but leaves the speed override alone
        assert!((swim.distance_km() - 1.9872).abs() < 1e-9);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
    }
}
