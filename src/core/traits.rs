//! Predictor boundary and success predicates

use crate::core::types::TrainingSample;

/// Completion rate at or above which a workout counts as completed
pub const SUCCESS_COMPLETION_THRESHOLD: f64 = 0.7;

/// Safety score at or above which a prediction counts as safe
pub const SUCCESS_SAFETY_THRESHOLD: f64 = 0.8;

/// A predicted outcome for one sample, as returned by an external predictor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedOutcome {
    /// Expected fraction of the plan the user will finish (0.0 to 1.0)
    pub expected_completion_rate: f64,
    /// Injury-risk score, higher is safer (0.0 to 1.0)
    pub safety_score: f64,
}

impl PredictedOutcome {
    pub fn new(expected_completion_rate: f64, safety_score: f64) -> Self {
        Self {
            expected_completion_rate,
            safety_score,
        }
    }
}

/// Boundary to whatever produces predictions for a sample.
///
/// The production predictor is a remote service; the pipeline only ever
/// sees its output as a plain `PredictedOutcome`, so implementations are
/// synchronous and callers resolve any I/O before handing results in.
pub trait Predictor {
    /// Predict the outcome for a single sample
    fn predict(&self, sample: &TrainingSample) -> PredictedOutcome;

    /// Predict outcomes for a batch of samples
    fn predict_batch(&self, samples: &[TrainingSample]) -> Vec<PredictedOutcome> {
        samples.iter().map(|s| self.predict(s)).collect()
    }
}

/// Whether a sample's reported outcome counts as a success:
/// completion rate >= 0.7 and no injury.
pub fn actual_success(sample: &TrainingSample) -> bool {
    sample.completion_rate >= SUCCESS_COMPLETION_THRESHOLD && !sample.injury_occurred
}

/// Whether a predicted outcome counts as a success:
/// expected completion rate >= 0.7 and safety score >= 0.8.
pub fn predicted_success(outcome: &PredictedOutcome) -> bool {
    outcome.expected_completion_rate >= SUCCESS_COMPLETION_THRESHOLD
        && outcome.safety_score >= SUCCESS_SAFETY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FitnessLevel;

    fn sample(completion_rate: f64, injury: bool) -> TrainingSample {
        TrainingSample {
            age: 30,
            weight: 70.0,
            height: 175.0,
            fitness_level: FitnessLevel::Intermediate,
            workout_duration: "Week".to_string(),
            completion_rate,
            difficulty_rating: 3,
            effectiveness_rating: 4,
            injury_occurred: injury,
        }
    }

    #[test]
    fn test_actual_success_threshold() {
        assert!(actual_success(&sample(0.7, false)));
        assert!(!actual_success(&sample(0.69, false)));
        assert!(!actual_success(&sample(0.9, true)));
    }

    #[test]
    fn test_predicted_success_requires_both_thresholds() {
        assert!(predicted_success(&PredictedOutcome::new(0.7, 0.8)));
        assert!(!predicted_success(&PredictedOutcome::new(0.69, 0.9)));
        assert!(!predicted_success(&PredictedOutcome::new(0.9, 0.79)));
    }
}
