//! Binary classification metrics
//!
//! Scores paired (actual, predicted) success outcomes into a 2x2 confusion
//! matrix plus accuracy, precision, recall, and F1.

use crate::core::{
    actual_success, predicted_success, LabeledOutcome, PipelineError, Predictor, Result,
    TrainingSample,
};
use serde::{Deserialize, Serialize};

/// Evaluation result for one test run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluation {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    /// Ordered [[TP, FP], [FN, TN]]
    pub confusion_matrix: [[usize; 2]; 2],
    pub total_samples: usize,
}

impl ModelEvaluation {
    pub fn true_positives(&self) -> usize {
        self.confusion_matrix[0][0]
    }

    pub fn false_positives(&self) -> usize {
        self.confusion_matrix[0][1]
    }

    pub fn false_negatives(&self) -> usize {
        self.confusion_matrix[1][0]
    }

    pub fn true_negatives(&self) -> usize {
        self.confusion_matrix[1][1]
    }
}

/// Score a sequence of outcome pairs. The input must be non-empty.
///
/// Precision and recall are zero-guarded on TP > 0 rather than on their
/// denominators, matching the long-standing reporting behavior: TP = 0
/// with FP > 0 yields precision 0 instead of an undefined value.
pub fn evaluate(outcomes: &[LabeledOutcome]) -> Result<ModelEvaluation> {
    if outcomes.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    let mut tp = 0usize;
    let mut tn = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;

    for outcome in outcomes {
        match (outcome.actual, outcome.predicted) {
            (true, true) => tp += 1,
            (false, false) => tn += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
        }
    }

    let accuracy = (tp + tn) as f64 / outcomes.len() as f64;
    let precision = if tp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    let recall = if tp > 0 {
        tp as f64 / (tp + fn_) as f64
    } else {
        0.0
    };
    let f1_score = if precision + recall > 0.0 {
        2.0 * (precision * recall) / (precision + recall)
    } else {
        0.0
    };

    Ok(ModelEvaluation {
        accuracy,
        precision,
        recall,
        f1_score,
        confusion_matrix: [[tp, fp], [fn_, tn]],
        total_samples: outcomes.len(),
    })
}

/// Run a predictor over a test set and score it.
///
/// Pairs each sample's reported outcome with the predictor's verdict using
/// the success predicates (completion >= 0.7 without injury; predicted
/// completion >= 0.7 with safety >= 0.8).
pub fn evaluate_with_predictor<P: Predictor>(
    predictor: &P,
    test_samples: &[TrainingSample],
) -> Result<ModelEvaluation> {
    let outcomes: Vec<LabeledOutcome> = test_samples
        .iter()
        .map(|sample| {
            let prediction = predictor.predict(sample);
            LabeledOutcome::new(actual_success(sample), predicted_success(&prediction))
        })
        .collect();

    evaluate(&outcomes)
}
