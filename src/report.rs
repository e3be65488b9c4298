//! Summary message rendering
//!
//! Produces the fixed human-readable line for a computed workout summary.
//! Pure fixed-format substitution: no locale handling, no pluralization.

use crate::types::WorkoutSummary;

/// Render the one-line summary message, numeric fields to 3 decimal places
pub fn summary_message(summary: &WorkoutSummary) -> String {
    format!(
        "Тип тренировки: {}; \
         Длительность: {:.3} ч.; \
         Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; \
         Потрачено ккал: {:.3}.",
        summary.activity_label,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories,
    )
}
