//! Range-based outlier rejection
//!
//! Second-pass filtering over already-validated samples. The bounds
//! overlap the validator's checks but are not identical: age gains a
//! [13, 80] bound here that first-pass validation does not apply.

use crate::core::TrainingSample;

/// Age bounds in years for plausible training samples
pub const AGE_RANGE: (i32, i32) = (13, 80);

/// Drop samples whose fields fall outside plausible physiological or
/// rating ranges. Order-preserving.
pub fn remove_outliers(samples: &[TrainingSample]) -> Vec<TrainingSample> {
    samples
        .iter()
        .filter(|s| {
            (AGE_RANGE.0..=AGE_RANGE.1).contains(&s.age)
                && (30.0..=200.0).contains(&s.weight)
                && (120.0..=230.0).contains(&s.height)
                && (0.0..=1.0).contains(&s.completion_rate)
                && (1..=5).contains(&s.difficulty_rating)
                && (1..=5).contains(&s.effectiveness_rating)
        })
        .cloned()
        .collect()
}
