//! Feedback validation and normalization
//!
//! The first pipeline stage: a raw record either passes validation and
//! becomes a canonical `TrainingSample`, or it is silently dropped. Bad
//! data must never abort the pipeline, so invalid records are not errors,
//! only a smaller output count.

use crate::core::{FitnessLevel, RawFeedback, TrainingSample};

/// Weight bounds in kilograms applied during normalization
pub const WEIGHT_RANGE: (f64, f64) = (30.0, 200.0);

/// Height bounds in centimeters applied during normalization
pub const HEIGHT_RANGE: (f64, f64) = (120.0, 230.0);

/// Validate one raw record and map it to a canonical training sample.
///
/// Returns `None` when any validation check fails: age, weight, and height
/// must be positive, the fitness level and duration labels non-empty,
/// completion rate within [0, 1], and both ratings within [1, 5].
/// Weight and height are clamped to plausible bounds; the fitness level is
/// mapped to the canonical vocabulary with `Intermediate` as the fallback.
pub fn validate_and_normalize(feedback: &RawFeedback) -> Option<TrainingSample> {
    if !is_valid(feedback) {
        return None;
    }

    Some(TrainingSample {
        age: feedback.user_age,
        weight: feedback.user_weight.clamp(WEIGHT_RANGE.0, WEIGHT_RANGE.1),
        height: feedback.user_height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1),
        fitness_level: FitnessLevel::from_label(&feedback.fitness_level),
        workout_duration: feedback.workout_duration.clone(),
        completion_rate: feedback.completion_rate,
        difficulty_rating: feedback.difficulty_rating,
        effectiveness_rating: feedback.effectiveness_rating,
        injury_occurred: feedback.injury_occurred,
    })
}

/// Validate and normalize a batch, dropping records that fail
pub fn clean_and_normalize(feedback: &[RawFeedback]) -> Vec<TrainingSample> {
    feedback.iter().filter_map(validate_and_normalize).collect()
}

fn is_valid(feedback: &RawFeedback) -> bool {
    feedback.user_age > 0
        && feedback.user_weight > 0.0
        && feedback.user_height > 0.0
        && !feedback.fitness_level.is_empty()
        && !feedback.workout_duration.is_empty()
        && (0.0..=1.0).contains(&feedback.completion_rate)
        && (1..=5).contains(&feedback.difficulty_rating)
        && (1..=5).contains(&feedback.effectiveness_rating)
}
