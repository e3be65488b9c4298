//! Workout calculator variants
//!
//! One module per activity. Each variant carries its own measured fields and
//! supplies its calorie formula through the [`WorkoutCalculator`] trait; the
//! distance and mean-speed formulas are shared defaults that variants may
//! override (swimming overrides mean speed).

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::types::{WorkoutCode, WorkoutSummary};

/// Meters per kilometer, used to scale per-action lengths into km
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour, used by duration-scaled calorie formulas
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Behavioral contract for a workout calculator.
///
/// Every variant must supply its calorie formula; there is no fallback.
/// `distance_km` and `mean_speed_kmh` have shared default implementations
/// driven by the accessor methods.
pub trait WorkoutCalculator {
    fn code(&self) -> WorkoutCode;

    /// Number of recorded action units (steps or strokes)
    fn action_count(&self) -> u32;

    fn duration_hours(&self) -> f64;

    fn weight_kg(&self) -> f64;

    /// Distance gained per action unit (stride or stroke length)
    fn step_length(&self) -> f64;

    /// Covered distance in km
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole duration in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Estimated energy expenditure in kcal
    fn spent_calories(&self) -> f64;

    /// Run all formulas and build the immutable summary record
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            activity_label: self.code().activity_label().to_string(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// A resolved workout, tagged by activity
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    /// Dispatch to the variant's calculator
    pub fn calculator(&self) -> &dyn WorkoutCalculator {
        match self {
            Workout::Running(w) => w,
            Workout::Walking(w) => w,
            Workout::Swimming(w) => w,
        }
    }

    pub fn code(&self) -> WorkoutCode {
        self.calculator().code()
    }

    /// Compute distance, mean speed, and calories for this workout
    pub fn summary(&self) -> WorkoutSummary {
        self.calculator().summary()
    }
}
